//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `coins` | Cast with three coins per line |
//! | `time` | Cast from the clock, or `--date Y-M-D --hour H [--lunar]` |
//! | `manual` | Cast from six explicit lines, bottom first |
//! | `cast` | Cast with the configured default method |
//! | `text` | Look up a single line text |
//!
//! Casting commands print the primary hexagram and its five derived
//! hexagrams as tables, followed by the interpretation. `--primary-only`
//! skips the derived tables.
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod reading;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
