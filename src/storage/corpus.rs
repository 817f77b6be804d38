//! Line-text corpus loaded from JSON
//!
//! The file maps a hexagram index (as a string key, `"0"`..`"63"`) to up to
//! six texts, bottom line first:
//!
//! ```json
//! { "0": ["初九：潜龙勿用。", "九二：见龙在田，利见大人。"] }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::LineTexts;

const BUILTIN: &str = include_str!("../../data/line_texts.json");

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read corpus {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse corpus: {0}")]
    Parse(String),

    #[error("Hexagram index {0} is out of range (0-63)")]
    IndexOutOfRange(u8),

    #[error("Hexagram {index} has {count} texts; at most 6 allowed")]
    TooManyLines { index: u8, count: usize },
}

/// Line texts keyed by hexagram index
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: HashMap<u8, Vec<String>>,
}

impl Corpus {
    /// An empty corpus; every lookup falls back to generic text
    pub fn empty() -> Self {
        Self::default()
    }

    /// The corpus shipped with the crate
    pub fn builtin() -> Result<Self, CorpusError> {
        Self::from_json(BUILTIN)
    }

    /// Loads a corpus file
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let content = fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parses and validates corpus JSON
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let entries: HashMap<u8, Vec<String>> =
            serde_json::from_str(json).map_err(|e| CorpusError::Parse(e.to_string()))?;

        for (&index, texts) in &entries {
            if index > 63 {
                return Err(CorpusError::IndexOutOfRange(index));
            }
            if texts.len() > 6 {
                return Err(CorpusError::TooManyLines {
                    index,
                    count: texts.len(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Number of hexagrams with at least one entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LineTexts for Corpus {
    fn entry(&self, index: u8, position: u8) -> Option<&str> {
        let slot = (position as usize).checked_sub(1)?;
        self.entries
            .get(&index)?
            .get(slot)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}
