//! Hexagram assembly
//!
//! Six lines pack into two trigrams (bit `i` of a trigram is set when its
//! `i`-th line from the bottom is yang). The hexagram index is
//! `upper * 8 + lower` and selects a name and element from a fixed table.

use serde::Serialize;

use super::line::{Line, LineKind};
use super::symbols::{Branch, Element, Stem, Trigram};

/// Name and element of each of the 64 figures, by index
const FIGURES: [(&str, Element); 64] = [
    ("乾为天", Element::Metal),
    ("坤为地", Element::Earth),
    ("水雷屯", Element::Wood),
    ("山水蒙", Element::Water),
    ("水天需", Element::Water),
    ("天水讼", Element::Metal),
    ("地水师", Element::Earth),
    ("水地比", Element::Water),
    ("风天小畜", Element::Wood),
    ("天泽履", Element::Metal),
    ("地天泰", Element::Earth),
    ("天地否", Element::Metal),
    ("天火同人", Element::Metal),
    ("火天大有", Element::Fire),
    ("地山谦", Element::Earth),
    ("雷地豫", Element::Wood),
    ("泽雷随", Element::Metal),
    ("山风蛊", Element::Earth),
    ("地泽临", Element::Earth),
    ("风地观", Element::Wood),
    ("火雷噬嗑", Element::Fire),
    ("山火贲", Element::Earth),
    ("山地剥", Element::Earth),
    ("地雷复", Element::Earth),
    ("天雷无妄", Element::Metal),
    ("山天大畜", Element::Earth),
    ("山雷颐", Element::Earth),
    ("泽风大过", Element::Metal),
    ("水山蹇", Element::Water),
    ("火水既济", Element::Fire),
    ("泽水困", Element::Metal),
    ("风水涣", Element::Wood),
    ("雷风恒", Element::Wood),
    ("天山遁", Element::Metal),
    ("雷天大壮", Element::Wood),
    ("火地晋", Element::Fire),
    ("地火明夷", Element::Earth),
    ("风火家人", Element::Wood),
    ("火泽睽", Element::Fire),
    ("水山蹇", Element::Water),
    ("雷水解", Element::Wood),
    ("山泽损", Element::Earth),
    ("风雷益", Element::Wood),
    ("泽天夬", Element::Metal),
    ("天风姤", Element::Metal),
    ("泽地萃", Element::Metal),
    ("地风升", Element::Earth),
    ("泽水困", Element::Metal),
    ("水风井", Element::Water),
    ("泽火革", Element::Metal),
    ("火风鼎", Element::Fire),
    ("震为雷", Element::Wood),
    ("艮为山", Element::Earth),
    ("风山渐", Element::Wood),
    ("雷泽归妹", Element::Wood),
    ("雷火丰", Element::Wood),
    ("火山旅", Element::Fire),
    ("巽为风", Element::Wood),
    ("兑为泽", Element::Metal),
    ("风水涣", Element::Wood),
    ("水泽节", Element::Water),
    ("风泽中孚", Element::Wood),
    ("雷山小过", Element::Wood),
    ("水火既济", Element::Water),
];

/// Packs three lines (bottom first) into a trigram value
fn trigram_bits(kinds: &[LineKind]) -> u8 {
    kinds
        .iter()
        .take(3)
        .enumerate()
        .filter(|(_, kind)| kind.is_yang())
        .fold(0u8, |acc, (i, _)| acc | (1u8 << i))
}

/// Ruling and mirror positions for an index.
///
/// Odd indices rule from the lower trigram, even ones from the upper.
fn ruling_and_mirror(index: u8) -> (u8, u8) {
    if index % 2 == 1 {
        (2, 5)
    } else {
        (5, 2)
    }
}

/// A six-line figure, raw or annotated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    /// Lines from bottom (position 1) to top (position 6)
    pub lines: [Line; 6],
    pub upper_trigram: Trigram,
    pub lower_trigram: Trigram,
    pub index: u8,
    pub name: &'static str,
    pub element: Element,
    pub ruling_position: u8,
    pub mirror_position: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_stem: Option<Stem>,
    /// Whether the cast date was given as a lunar date (stored, never converted)
    pub lunar: bool,
}

impl Hexagram {
    /// Builds a raw hexagram from six line kinds, bottom first
    pub fn assemble(kinds: [LineKind; 6]) -> Self {
        let lower = trigram_bits(&kinds[0..3]);
        let upper = trigram_bits(&kinds[3..6]);
        let index = upper * 8 + lower;
        let (name, element) = FIGURES[index as usize];
        let (ruling_position, mirror_position) = ruling_and_mirror(index);

        let lines = std::array::from_fn(|i| {
            let position = i as u8 + 1;
            let mut line = Line::new(kinds[i], position);
            line.is_ruling = position == ruling_position;
            line.is_mirror = position == mirror_position;
            line
        });

        Self {
            lines,
            upper_trigram: Trigram::from_bits(upper),
            lower_trigram: Trigram::from_bits(lower),
            index,
            name,
            element,
            ruling_position,
            mirror_position,
            month: None,
            day: None,
            hour: None,
            day_stem: None,
            lunar: false,
        }
    }

    /// Returns a copy stamped with the cast date
    pub fn stamped(mut self, month: u32, day: u32, hour: u32, day_stem: Stem, lunar: bool) -> Self {
        self.month = Some(month);
        self.day = Some(day);
        self.hour = Some(hour);
        self.day_stem = Some(day_stem);
        self.lunar = lunar;
        self
    }

    /// Returns a copy carrying another hexagram's cast date
    pub fn with_stamp_of(mut self, source: &Hexagram) -> Self {
        self.month = source.month;
        self.day = source.day;
        self.hour = source.hour;
        self.day_stem = source.day_stem;
        self.lunar = source.lunar;
        self
    }

    /// Line kinds, bottom first
    pub fn kinds(&self) -> [LineKind; 6] {
        std::array::from_fn(|i| self.lines[i].kind)
    }

    /// Line at a 1-based position
    pub fn line(&self, position: u8) -> Option<&Line> {
        self.lines.get((position as usize).checked_sub(1)?)
    }

    pub fn ruling_line(&self) -> &Line {
        &self.lines[(self.ruling_position - 1) as usize]
    }

    pub fn mirror_line(&self) -> &Line {
        &self.lines[(self.mirror_position - 1) as usize]
    }

    /// Palace (group of eight) the hexagram belongs to
    pub fn palace(&self) -> u8 {
        self.index / 8
    }

    /// Positions of the old (changing) lines
    pub fn changing_lines(&self) -> Vec<u8> {
        self.lines
            .iter()
            .filter(|l| l.is_changing())
            .map(|l| l.position)
            .collect()
    }

    pub fn has_changing_lines(&self) -> bool {
        self.lines.iter().any(Line::is_changing)
    }

    /// Generation label of the ruling line (初世, 二世, ... 游魂, 归魂)
    pub fn ruling_description(&self) -> &'static str {
        let yang = self.upper_trigram.is_yang_figure() || self.lower_trigram.is_yang_figure();
        match (self.ruling_position, yang) {
            (1, true) => "初世",
            (2, true) => "二世",
            (3, true) => "三世",
            (4, true) => "四世",
            (5, true) => "五世",
            (6, true) => "上世",
            (1 | 4, false) => "游魂",
            (2 | 5, false) => "归魂",
            (_, false) => "纯卦",
            _ => "",
        }
    }

    /// Branch of the bottom line, once stem-branch annotation has run
    pub fn body_branch(&self) -> Option<Branch> {
        self.lines[0].branch
    }

    /// True once the stem-branch, kinship and spirit passes have all run
    pub fn is_annotated(&self) -> bool {
        self.lines
            .iter()
            .all(|l| l.element.is_some() && l.kinship.is_some() && l.spirit.is_some())
    }
}
