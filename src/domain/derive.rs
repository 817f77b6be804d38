//! Derived hexagrams
//!
//! Five fixed transforms of a base hexagram. Each returns a fresh raw
//! hexagram (no annotations) carrying the base's cast date, so it can be run
//! through the annotation passes for the same day.

use serde::Serialize;
use std::fmt;

use super::hexagram::Hexagram;
use super::line::LineKind;

/// The five derivations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedKind {
    Transformed,
    Hidden,
    Mutual,
    Opposite,
    Reversed,
}

impl DerivedKind {
    pub const ALL: [DerivedKind; 5] = [
        DerivedKind::Transformed,
        DerivedKind::Hidden,
        DerivedKind::Mutual,
        DerivedKind::Opposite,
        DerivedKind::Reversed,
    ];

    pub fn hanzi(self) -> &'static str {
        match self {
            DerivedKind::Transformed => "变卦",
            DerivedKind::Hidden => "伏卦",
            DerivedKind::Mutual => "互卦",
            DerivedKind::Opposite => "错卦",
            DerivedKind::Reversed => "综卦",
        }
    }
}

impl fmt::Display for DerivedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DerivedKind::Transformed => "Transformed",
            DerivedKind::Hidden => "Hidden",
            DerivedKind::Mutual => "Mutual",
            DerivedKind::Opposite => "Opposite",
            DerivedKind::Reversed => "Reversed",
        };
        f.write_str(name)
    }
}

fn rebuild(base: &Hexagram, kinds: [LineKind; 6]) -> Hexagram {
    Hexagram::assemble(kinds).with_stamp_of(base)
}

/// Changing lines flip: old yang becomes young yin, old yin becomes young yang
pub fn transformed(hexagram: &Hexagram) -> Hexagram {
    let kinds = hexagram.kinds().map(|kind| match kind {
        LineKind::OldYang => LineKind::YoungYin,
        LineKind::OldYin => LineKind::YoungYang,
        other => other,
    });
    rebuild(hexagram, kinds)
}

/// Changing lines settle without flipping polarity
pub fn hidden(hexagram: &Hexagram) -> Hexagram {
    let kinds = hexagram.kinds().map(|kind| match kind {
        LineKind::OldYang => LineKind::YoungYang,
        LineKind::OldYin => LineKind::YoungYin,
        other => other,
    });
    rebuild(hexagram, kinds)
}

/// Lines 2-4 form the lower trigram, lines 3-5 the upper
pub fn mutual(hexagram: &Hexagram) -> Hexagram {
    let k = hexagram.kinds();
    rebuild(hexagram, [k[1], k[2], k[3], k[2], k[3], k[4]])
}

/// Every line swaps polarity, keeping its age
pub fn opposite(hexagram: &Hexagram) -> Hexagram {
    let kinds = hexagram.kinds().map(|kind| match kind {
        LineKind::YoungYang => LineKind::YoungYin,
        LineKind::YoungYin => LineKind::YoungYang,
        LineKind::OldYang => LineKind::OldYin,
        LineKind::OldYin => LineKind::OldYang,
    });
    rebuild(hexagram, kinds)
}

/// The figure turned upside down: position i takes position 7 - i
pub fn reversed(hexagram: &Hexagram) -> Hexagram {
    let mut kinds = hexagram.kinds();
    kinds.reverse();
    rebuild(hexagram, kinds)
}

/// Applies one derivation by kind
pub fn derive(kind: DerivedKind, hexagram: &Hexagram) -> Hexagram {
    match kind {
        DerivedKind::Transformed => transformed(hexagram),
        DerivedKind::Hidden => hidden(hexagram),
        DerivedKind::Mutual => mutual(hexagram),
        DerivedKind::Opposite => opposite(hexagram),
        DerivedKind::Reversed => reversed(hexagram),
    }
}
