//! Line-text lookup
//!
//! Texts are keyed by hexagram index and line position. A missing entry is
//! never an error: the lookup falls back to a sentence describing the line.

use super::line::Line;

/// Read-only source of line texts
pub trait LineTexts {
    /// The stored text for a 1-based position of a hexagram, if any
    fn entry(&self, index: u8, position: u8) -> Option<&str>;

    /// Text for a line of the given hexagram, falling back to a generic sentence
    fn lookup(&self, line: &Line, index: u8) -> String {
        match self.entry(index, line.position) {
            Some(text) => text.to_string(),
            None => generic_text(line),
        }
    }
}

/// A source with no texts at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTexts;

impl LineTexts for NoTexts {
    fn entry(&self, _index: u8, _position: u8) -> Option<&str> {
        None
    }
}

/// Sentence stating the line's polarity and position
pub fn generic_text(line: &Line) -> String {
    if line.is_yang() {
        format!("Yang line at position {}: firm and strong.", line.position)
    } else {
        format!("Yin line at position {}: yielding and receptive.", line.position)
    }
}
