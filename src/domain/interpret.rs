//! Interpretation of an annotated hexagram
//!
//! Collects what a reading reports (figure, ruling/mirror lines, changing
//! lines and the transformed figure, kinship and spirits, and a closing
//! verdict) into a value whose `Display` is the text report.

use serde::Serialize;
use std::fmt;

use super::derive::transformed;
use super::hexagram::Hexagram;
use super::line::Line;
use super::symbols::{Kinship, Spirit};

/// Kinship of one line, with its ruling/mirror markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineKinship {
    pub position: u8,
    pub kinship: Kinship,
    pub is_ruling: bool,
    pub is_mirror: bool,
}

/// Spirit of one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSpirit {
    pub position: u8,
    pub spirit: Spirit,
}

/// Closing judgement on the ruling line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub ruling_is_yang: bool,
    pub ruling_position: u8,
    /// Yang at an odd position or yin at an even one
    pub aligned: bool,
    /// The ruling line is itself changing
    pub will_change: bool,
}

impl Verdict {
    fn for_line(line: &Line) -> Self {
        let odd = line.position % 2 == 1;
        Self {
            ruling_is_yang: line.is_yang(),
            ruling_position: line.position,
            aligned: line.is_yang() == odd,
            will_change: line.is_changing(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let polarity = if self.ruling_is_yang { "yang" } else { "yin" };
        let parity = if self.ruling_position % 2 == 1 { "odd" } else { "even" };
        let alignment = if self.aligned { "aligned" } else { "misaligned" };
        write!(
            f,
            "Ruling line is {polarity} at an {parity} position: {alignment}."
        )?;
        if self.will_change {
            write!(f, " The ruling line is changing: situation will change.")?;
        }
        Ok(())
    }
}

/// A complete interpretation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub name: &'static str,
    /// Glyph rows from the top line down, with ruling/mirror markers
    pub figure: Vec<String>,
    pub ruling_position: u8,
    pub mirror_position: u8,
    pub changing_lines: Vec<u8>,
    /// Name of the transformed hexagram, present only when lines change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformed_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kinship: Vec<LineKinship>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spirits: Vec<LineSpirit>,
    pub verdict: Verdict,
}

/// One glyph row: the line glyph followed by ruling/mirror markers
pub fn glyph_row(line: &Line) -> String {
    let mut row = line.kind.glyph().to_string();
    if line.is_ruling {
        row.push_str(" ruling");
    }
    if line.is_mirror {
        row.push_str(" mirror");
    }
    row
}

/// Builds the interpretation of a hexagram
pub fn interpret(hexagram: &Hexagram) -> Interpretation {
    let changing_lines = hexagram.changing_lines();
    let transformed_name = if changing_lines.is_empty() {
        None
    } else {
        Some(transformed(hexagram).name)
    };

    let kinship = hexagram
        .lines
        .iter()
        .filter_map(|line| {
            line.kinship.map(|kinship| LineKinship {
                position: line.position,
                kinship,
                is_ruling: line.is_ruling,
                is_mirror: line.is_mirror,
            })
        })
        .collect();

    let spirits = hexagram
        .lines
        .iter()
        .filter_map(|line| {
            line.spirit.map(|spirit| LineSpirit {
                position: line.position,
                spirit,
            })
        })
        .collect();

    Interpretation {
        name: hexagram.name,
        figure: hexagram.lines.iter().rev().map(glyph_row).collect(),
        ruling_position: hexagram.ruling_position,
        mirror_position: hexagram.mirror_position,
        changing_lines,
        transformed_name,
        kinship,
        spirits,
        verdict: Verdict::for_line(hexagram.ruling_line()),
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hexagram: {}", self.name)?;
        writeln!(f, "Figure:")?;
        for row in &self.figure {
            writeln!(f, "  {row}")?;
        }
        writeln!(
            f,
            "Ruling line: {}, mirror line: {}",
            self.ruling_position, self.mirror_position
        )?;

        if self.changing_lines.is_empty() {
            writeln!(f, "No changing lines")?;
        } else {
            let positions: Vec<String> =
                self.changing_lines.iter().map(|p| format!("line {p}")).collect();
            writeln!(f, "Changing lines: {}", positions.join(", "))?;
            if let Some(name) = self.transformed_name {
                writeln!(f, "Transformed hexagram: {name}")?;
            }
        }

        if !self.kinship.is_empty() {
            writeln!(f, "Kinship:")?;
            for entry in &self.kinship {
                write!(
                    f,
                    "  Line {}: {} ({})",
                    entry.position,
                    entry.kinship,
                    entry.kinship.hanzi()
                )?;
                if entry.is_ruling {
                    write!(f, " [ruling]")?;
                }
                if entry.is_mirror {
                    write!(f, " [mirror]")?;
                }
                writeln!(f)?;
            }
        }

        if !self.spirits.is_empty() {
            writeln!(f, "Spirits:")?;
            for entry in &self.spirits {
                writeln!(
                    f,
                    "  Line {}: {} ({})",
                    entry.position,
                    entry.spirit,
                    entry.spirit.hanzi()
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Verdict:")?;
        write!(f, "{}", self.verdict)
    }
}
