//! Line model
//!
//! A line is one of four kinds: young (stable) or old (changing), each yang
//! or yin. Positions run 1..=6 from the bottom.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::DivinationError;
use super::symbols::{Branch, Element, Kinship, Spirit, Stem};

/// Kind of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    YoungYang,
    YoungYin,
    OldYang,
    OldYin,
}

impl LineKind {
    /// Decodes the numeric codes 0..=3 (young yang, young yin, old yang, old yin)
    pub fn from_code(code: u8) -> Result<Self, DivinationError> {
        match code {
            0 => Ok(LineKind::YoungYang),
            1 => Ok(LineKind::YoungYin),
            2 => Ok(LineKind::OldYang),
            3 => Ok(LineKind::OldYin),
            _ => Err(DivinationError::InvalidInput(format!(
                "line code must be 0..=3, got {code}"
            ))),
        }
    }

    /// Maps any number onto a kind by its remainder modulo 4
    pub fn from_number(value: i64) -> Self {
        match value.rem_euclid(4) {
            0 => LineKind::YoungYang,
            1 => LineKind::YoungYin,
            2 => LineKind::OldYang,
            _ => LineKind::OldYin,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_yang(self) -> bool {
        matches!(self, LineKind::YoungYang | LineKind::OldYang)
    }

    /// Old lines are the changing ones
    pub fn is_changing(self) -> bool {
        matches!(self, LineKind::OldYang | LineKind::OldYin)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            LineKind::YoungYang => "———",
            LineKind::YoungYin => "— —",
            LineKind::OldYang => "—○—",
            LineKind::OldYin => "—×—",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::YoungYang => "young-yang",
            LineKind::YoungYin => "young-yin",
            LineKind::OldYang => "old-yang",
            LineKind::OldYin => "old-yin",
        };
        f.write_str(name)
    }
}

impl FromStr for LineKind {
    type Err = DivinationError;

    /// Accepts a numeric code or a name such as `yang`, `young-yin`, `old-yang`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code);
        }
        match s.replace('_', "-").as_str() {
            "yang" | "young-yang" => Ok(LineKind::YoungYang),
            "yin" | "young-yin" => Ok(LineKind::YoungYin),
            "old-yang" => Ok(LineKind::OldYang),
            "old-yin" => Ok(LineKind::OldYin),
            other => Err(DivinationError::InvalidInput(format!(
                "unknown line kind '{other}'"
            ))),
        }
    }
}

/// A line at a fixed position, with whatever annotations have been applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub kind: LineKind,
    pub position: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem: Option<Stem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<Branch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinship: Option<Kinship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spirit: Option<Spirit>,
    pub is_ruling: bool,
    pub is_mirror: bool,
}

impl Line {
    /// Creates a raw line with no annotations
    pub fn new(kind: LineKind, position: u8) -> Self {
        Self {
            kind,
            position,
            stem: None,
            branch: None,
            element: None,
            kinship: None,
            spirit: None,
            is_ruling: false,
            is_mirror: false,
        }
    }

    /// The same kind at another position, stripped of annotations
    pub fn moved_to(&self, position: u8) -> Self {
        Self::new(self.kind, position)
    }

    pub fn is_yang(&self) -> bool {
        self.kind.is_yang()
    }

    pub fn is_changing(&self) -> bool {
        self.kind.is_changing()
    }

    /// Classic name of the line (初九, 六二, ... 上六)
    pub fn traditional_name(&self) -> String {
        let number = if self.is_yang() { "九" } else { "六" };
        match self.position {
            1 => format!("初{number}"),
            6 => format!("上{number}"),
            p @ 2..=5 => {
                const ORDINALS: [&str; 4] = ["二", "三", "四", "五"];
                format!("{number}{}", ORDINALS[(p - 2) as usize])
            }
            _ => String::new(),
        }
    }
}
