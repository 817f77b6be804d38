//! The three annotation passes
//!
//! Each pass takes a hexagram by reference and returns an annotated copy;
//! the input is never modified.
//!
//! Stem-branch rule-sets exist for palaces 0, 1 and 3 only. Every other
//! palace reuses the palace-0 set.

use chrono::Local;

use super::calendar::day_stem;
use super::error::DivinationError;
use super::hexagram::Hexagram;
use super::symbols::{Branch, Kinship, Spirit, Stem};

struct PalaceRule {
    stems: [Stem; 6],
    branches: [Branch; 6],
}

const QIAN_RULE: PalaceRule = PalaceRule {
    stems: [Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren, Stem::Wu],
    branches: [Branch::Zi, Branch::Yin, Branch::Chen, Branch::Wu, Branch::Shen, Branch::Xu],
};

const KUN_RULE: PalaceRule = PalaceRule {
    stems: [Stem::Yi, Stem::Ding, Stem::Ji, Stem::Xin, Stem::Gui, Stem::Ji],
    branches: [Branch::Chou, Branch::Mao, Branch::Si, Branch::Wei, Branch::You, Branch::Hai],
};

const ZHEN_RULE: PalaceRule = PalaceRule {
    stems: [Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren, Stem::Wu],
    branches: [Branch::Zi, Branch::Yin, Branch::Chen, Branch::Wu, Branch::Shen, Branch::Xu],
};

fn palace_rule(palace: u8) -> &'static PalaceRule {
    match palace {
        1 => &KUN_RULE,
        3 => &ZHEN_RULE,
        _ => &QIAN_RULE,
    }
}

/// Assigns stem, branch and element to every line from the hexagram's palace
pub fn assign_stems_and_branches(hexagram: &Hexagram) -> Hexagram {
    let rule = palace_rule(hexagram.palace());
    let mut out = hexagram.clone();
    for (i, line) in out.lines.iter_mut().enumerate() {
        let branch = rule.branches[i];
        line.stem = Some(rule.stems[i]);
        line.branch = Some(branch);
        line.element = Some(branch.element());
    }
    out
}

/// Assigns kinship roles relative to the ruling line's element
///
/// Fails with `PreconditionMissing` when the ruling line has no element yet.
/// Lines without an element are left without a role.
pub fn assign_kinship(hexagram: &Hexagram) -> Result<Hexagram, DivinationError> {
    let ruling = hexagram.ruling_line().element.ok_or_else(|| {
        DivinationError::PreconditionMissing(
            "ruling line has no element; assign stems and branches first".to_string(),
        )
    })?;

    let mut out = hexagram.clone();
    for line in out.lines.iter_mut() {
        if let Some(element) = line.element {
            line.kinship = Some(Kinship::between(ruling, element));
        }
    }
    Ok(out)
}

/// Assigns the six spirits top-down, starting from the day stem's spirit
///
/// A hexagram without a day stem gets today's, which is kept on the result.
pub fn assign_spirits(hexagram: &Hexagram) -> Hexagram {
    let stem = hexagram
        .day_stem
        .unwrap_or_else(|| day_stem(Local::now().date_naive()));
    assign_spirits_for(hexagram, stem)
}

/// Assigns spirits for an explicit day stem
pub fn assign_spirits_for(hexagram: &Hexagram, stem: Stem) -> Hexagram {
    let start = Spirit::starting_for(stem);
    let mut out = hexagram.clone();
    out.day_stem = Some(stem);
    for (steps, line) in out.lines.iter_mut().rev().enumerate() {
        line.spirit = Some(start.advance(steps));
    }
    out
}

/// Runs stem-branch, kinship and spirit passes in order
pub fn annotate(hexagram: &Hexagram) -> Result<Hexagram, DivinationError> {
    let with_branches = assign_stems_and_branches(hexagram);
    let with_kinship = assign_kinship(&with_branches)?;
    Ok(assign_spirits(&with_kinship))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::line::LineKind::*;
    use crate::domain::symbols::Element;

    #[test]
    fn palace_zero_rule() {
        // Index 0 is palace 0
        let hex = Hexagram::assemble([YoungYin; 6]);
        let out = assign_stems_and_branches(&hex);

        let stems: Vec<_> = out.lines.iter().map(|l| l.stem.unwrap()).collect();
        let branches: Vec<_> = out.lines.iter().map(|l| l.branch.unwrap()).collect();
        assert_eq!(stems, QIAN_RULE.stems.to_vec());
        assert_eq!(
            branches,
            vec![Branch::Zi, Branch::Yin, Branch::Chen, Branch::Wu, Branch::Shen, Branch::Xu]
        );
        assert_eq!(out.lines[0].element, Some(Element::Water));
        assert_eq!(out.lines[1].element, Some(Element::Fire));
        assert_eq!(out.lines[2].element, Some(Element::Earth));
        assert_eq!(out.body_branch(), Some(Branch::Zi));
    }

    #[test]
    fn palace_one_rule() {
        // Lower bits 7, upper bits 1 -> index 15, palace 1
        let hex = Hexagram::assemble([YoungYang, YoungYang, YoungYang, YoungYang, YoungYin, YoungYin]);
        assert_eq!(hex.palace(), 1);
        let out = assign_stems_and_branches(&hex);
        assert_eq!(out.lines[0].stem, Some(Stem::Yi));
        assert_eq!(out.lines[0].branch, Some(Branch::Chou));
        assert_eq!(out.lines[5].branch, Some(Branch::Hai));
        assert_eq!(out.lines[5].element, Some(Element::Wood));
        assert_eq!(out.lines[4].element, Some(Element::Metal));
    }

    #[test]
    fn unmapped_palaces_fall_back_to_palace_zero() {
        // All yang: index 63, palace 7
        let hex = Hexagram::assemble([YoungYang; 6]);
        assert_eq!(hex.palace(), 7);
        let out = assign_stems_and_branches(&hex);
        assert_eq!(out.lines[0].branch, Some(Branch::Zi));
        assert_eq!(out.lines[5].stem, Some(Stem::Wu));
    }

    #[test]
    fn annotation_leaves_input_untouched() {
        let hex = Hexagram::assemble([OldYang, YoungYin, YoungYang, YoungYin, OldYin, YoungYang]);
        let before = hex.clone();
        let annotated = annotate(&hex).unwrap();
        assert_eq!(hex, before);
        assert!(annotated.is_annotated());
    }

    #[test]
    fn kinship_requires_elements() {
        let hex = Hexagram::assemble([YoungYang; 6]);
        assert!(matches!(
            assign_kinship(&hex),
            Err(DivinationError::PreconditionMissing(_))
        ));
    }

    #[test]
    fn kinship_relative_to_ruling_line() {
        // Index 63 rules from position 2 (Yin -> Fire)
        let hex = assign_stems_and_branches(&Hexagram::assemble([YoungYang; 6]));
        let out = assign_kinship(&hex).unwrap();

        assert_eq!(out.ruling_line().kinship, Some(Kinship::Sibling));
        // Zi (Water) restricts Fire
        assert_eq!(out.lines[0].kinship, Some(Kinship::SpouseWealth));
        // Chen (Earth) is generated by Fire
        assert_eq!(out.lines[2].kinship, Some(Kinship::Offspring));
        // Wu (Fire) matches
        assert_eq!(out.lines[3].kinship, Some(Kinship::Sibling));
        // Shen (Water) restricts Fire
        assert_eq!(out.lines[4].kinship, Some(Kinship::SpouseWealth));
    }

    #[test]
    fn spirits_run_top_down() {
        let hex = Hexagram::assemble([YoungYang; 6]);
        let out = assign_spirits_for(&hex, Stem::Bing);

        assert_eq!(out.lines[5].spirit, Some(Spirit::ZhuQue));
        assert_eq!(out.lines[4].spirit, Some(Spirit::GouChen));
        assert_eq!(out.lines[3].spirit, Some(Spirit::TengShe));
        assert_eq!(out.lines[2].spirit, Some(Spirit::BaiHu));
        assert_eq!(out.lines[1].spirit, Some(Spirit::XuanWu));
        assert_eq!(out.lines[0].spirit, Some(Spirit::QingLong));
        assert_eq!(out.day_stem, Some(Stem::Bing));
    }

    #[test]
    fn spirits_use_stamped_day_stem() {
        let hex = Hexagram::assemble([YoungYin; 6]).stamped(1, 1, 0, Stem::Ren, false);
        let out = assign_spirits(&hex);
        assert_eq!(out.lines[5].spirit, Some(Spirit::BaiHu));
        assert_eq!(out.lines[0].spirit, Some(Spirit::TengShe));
    }

    #[test]
    fn missing_day_stem_is_filled() {
        let hex = Hexagram::assemble([YoungYin; 6]);
        let out = assign_spirits(&hex);
        assert!(out.day_stem.is_some());
        assert!(out.lines.iter().all(|l| l.spirit.is_some()));
    }
}
