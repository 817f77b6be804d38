//! Closed symbol sets used to annotate lines
//!
//! Trigrams, the five elements, heavenly stems, earthly branches, kinship
//! roles and the six spirits. Each carries an English display name and its
//! traditional character via `hanzi()`.

use serde::Serialize;
use std::fmt;

/// One of the eight base figures, numbered by the bit pattern of its lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

impl Trigram {
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Dui,
        Trigram::Li,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
    ];

    /// Maps a 3-bit value to its trigram; only the low three bits are used
    pub fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b111) as usize]
    }

    /// The 3-bit value (0..=7)
    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn hanzi(self) -> &'static str {
        match self {
            Trigram::Qian => "乾",
            Trigram::Dui => "兑",
            Trigram::Li => "离",
            Trigram::Zhen => "震",
            Trigram::Xun => "巽",
            Trigram::Kan => "坎",
            Trigram::Gen => "艮",
            Trigram::Kun => "坤",
        }
    }

    /// Qian, Kan, Gen and Zhen count as yang figures when labelling the ruling line
    pub fn is_yang_figure(self) -> bool {
        matches!(self, Trigram::Qian | Trigram::Kan | Trigram::Gen | Trigram::Zhen)
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Trigram::Qian => "Qian",
            Trigram::Dui => "Dui",
            Trigram::Li => "Li",
            Trigram::Zhen => "Zhen",
            Trigram::Xun => "Xun",
            Trigram::Kan => "Kan",
            Trigram::Gen => "Gen",
            Trigram::Kun => "Kun",
        };
        f.write_str(name)
    }
}

/// The five elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

impl Element {
    /// The element this one generates (Metal→Water→Wood→Fire→Earth→Metal)
    pub fn generates(self) -> Element {
        match self {
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
        }
    }

    /// The element this one restricts (Metal→Wood→Earth→Water→Fire→Metal)
    pub fn restricts(self) -> Element {
        match self {
            Element::Metal => Element::Wood,
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
        }
    }

    pub fn hanzi(self) -> &'static str {
        match self {
            Element::Metal => "金",
            Element::Wood => "木",
            Element::Water => "水",
            Element::Fire => "火",
            Element::Earth => "土",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Metal => "Metal",
            Element::Wood => "Wood",
            Element::Water => "Water",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
        };
        f.write_str(name)
    }
}

/// The ten heavenly stems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// Stem at a position in the ten-day cycle, wrapping around
    pub fn cyclic(n: i64) -> Self {
        Self::ALL[n.rem_euclid(10) as usize]
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn hanzi(self) -> &'static str {
        const NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
        NAMES[self as usize]
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [&str; 10] = [
            "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
        ];
        f.write_str(NAMES[*self as usize])
    }
}

/// The twelve earthly branches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    /// Element carried by the branch
    pub fn element(self) -> Element {
        match self {
            Branch::Zi | Branch::Shen => Element::Water,
            Branch::Yin | Branch::Wu => Element::Fire,
            Branch::Chen | Branch::Xu | Branch::Chou | Branch::Wei => Element::Earth,
            Branch::Hai | Branch::Mao => Element::Wood,
            Branch::Si | Branch::You => Element::Metal,
        }
    }

    pub fn hanzi(self) -> &'static str {
        const NAMES: [&str; 12] = [
            "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
        ];
        NAMES[self as usize]
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [&str; 12] = [
            "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
        ];
        f.write_str(NAMES[*self as usize])
    }
}

/// Kinship role of a line relative to the ruling line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kinship {
    Parent,
    Offspring,
    Sibling,
    SpouseWealth,
    OfficerGhost,
}

impl Kinship {
    /// Role of a line whose element is `line` when the ruling line's element is `ruling`
    pub fn between(ruling: Element, line: Element) -> Self {
        if ruling == line {
            Kinship::Sibling
        } else if ruling.generates() == line {
            Kinship::Offspring
        } else if ruling.restricts() == line {
            Kinship::OfficerGhost
        } else if line.generates() == ruling {
            Kinship::Parent
        } else if line.restricts() == ruling {
            Kinship::SpouseWealth
        } else {
            Kinship::Sibling
        }
    }

    pub fn hanzi(self) -> &'static str {
        match self {
            Kinship::Parent => "父母",
            Kinship::Offspring => "子孙",
            Kinship::Sibling => "兄弟",
            Kinship::SpouseWealth => "妻财",
            Kinship::OfficerGhost => "官鬼",
        }
    }
}

impl fmt::Display for Kinship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kinship::Parent => "Parent",
            Kinship::Offspring => "Offspring",
            Kinship::Sibling => "Sibling",
            Kinship::SpouseWealth => "Spouse-Wealth",
            Kinship::OfficerGhost => "Officer-Ghost",
        };
        f.write_str(name)
    }
}

/// The six spirits, in assignment order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Spirit {
    QingLong,
    ZhuQue,
    GouChen,
    TengShe,
    BaiHu,
    XuanWu,
}

impl Spirit {
    pub const ALL: [Spirit; 6] = [
        Spirit::QingLong,
        Spirit::ZhuQue,
        Spirit::GouChen,
        Spirit::TengShe,
        Spirit::BaiHu,
        Spirit::XuanWu,
    ];

    /// Spirit placed on the top line for a given day stem
    pub fn starting_for(stem: Stem) -> Self {
        match stem {
            Stem::Jia | Stem::Yi => Spirit::QingLong,
            Stem::Bing | Stem::Ding => Spirit::ZhuQue,
            Stem::Wu | Stem::Ji => Spirit::GouChen,
            Stem::Geng | Stem::Xin => Spirit::TengShe,
            Stem::Ren | Stem::Gui => Spirit::BaiHu,
        }
    }

    /// The spirit `steps` places further along the cycle
    pub fn advance(self, steps: usize) -> Self {
        Self::ALL[(self as usize + steps) % Self::ALL.len()]
    }

    pub fn hanzi(self) -> &'static str {
        match self {
            Spirit::QingLong => "青龙",
            Spirit::ZhuQue => "朱雀",
            Spirit::GouChen => "勾陈",
            Spirit::TengShe => "腾蛇",
            Spirit::BaiHu => "白虎",
            Spirit::XuanWu => "玄武",
        }
    }
}

impl fmt::Display for Spirit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Spirit::QingLong => "Azure Dragon",
            Spirit::ZhuQue => "Vermilion Bird",
            Spirit::GouChen => "Hooked Array",
            Spirit::TengShe => "Soaring Serpent",
            Spirit::BaiHu => "White Tiger",
            Spirit::XuanWu => "Black Tortoise",
        };
        f.write_str(name)
    }
}
