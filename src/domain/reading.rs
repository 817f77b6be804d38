//! Full readings
//!
//! A reading annotates the primary hexagram, derives and annotates the five
//! related hexagrams from it, attaches line texts to each, and interprets
//! the primary.

use serde::Serialize;
use tracing::debug;

use super::annotate::annotate;
use super::cast::CastMethod;
use super::derive::{derive, DerivedKind};
use super::error::DivinationError;
use super::hexagram::Hexagram;
use super::interpret::{interpret, Interpretation};
use super::symbols::Branch;
use super::texts::LineTexts;

/// An annotated hexagram with the extras shown alongside it
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    /// Which derivation produced it; `None` for the primary hexagram
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived: Option<DerivedKind>,
    pub hexagram: Hexagram,
    pub ruling_description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_branch: Option<Branch>,
    /// Line texts, bottom line first
    pub texts: Vec<String>,
}

impl Chart {
    fn build(
        derived: Option<DerivedKind>,
        raw: &Hexagram,
        texts: &dyn LineTexts,
    ) -> Result<Self, DivinationError> {
        let hexagram = annotate(raw)?;
        let texts = hexagram
            .lines
            .iter()
            .map(|line| texts.lookup(line, hexagram.index))
            .collect();

        Ok(Self {
            derived,
            ruling_description: hexagram.ruling_description(),
            body_branch: hexagram.body_branch(),
            hexagram,
            texts,
        })
    }

    /// Heading such as `Primary` or `Mutual`
    pub fn title(&self) -> String {
        match self.derived {
            Some(kind) => kind.to_string(),
            None => "Primary".to_string(),
        }
    }
}

/// A primary hexagram, its derived hexagrams and the interpretation
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub method: CastMethod,
    pub primary: Chart,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub derived: Vec<Chart>,
    pub interpretation: Interpretation,
}

impl Reading {
    /// Runs the full pipeline on a freshly cast hexagram
    pub fn from_cast(
        method: CastMethod,
        cast: &Hexagram,
        texts: &dyn LineTexts,
        with_derived: bool,
    ) -> Result<Self, DivinationError> {
        debug!(
            method = method.as_str(),
            index = cast.index,
            name = cast.name,
            "building reading"
        );

        let primary = Chart::build(None, cast, texts)?;

        let derived = if with_derived {
            DerivedKind::ALL
                .iter()
                .map(|&kind| {
                    let raw = derive(kind, &primary.hexagram);
                    debug!(derived = %kind, index = raw.index, "derived hexagram");
                    Chart::build(Some(kind), &raw, texts)
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        let interpretation = interpret(&primary.hexagram);

        Ok(Self {
            method,
            primary,
            derived,
            interpretation,
        })
    }

    /// The primary chart followed by the derived ones
    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        std::iter::once(&self.primary).chain(self.derived.iter())
    }
}
