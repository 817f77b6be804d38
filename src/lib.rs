//! liuyao - six-line divination
//!
//! Casts a hexagram from coins, the clock or explicit values, annotates each
//! line with stems, branches, elements, kinship roles and spirits, derives
//! the five related hexagrams and interprets the result.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{DivinationError, Hexagram, Line, LineKind, Reading};
