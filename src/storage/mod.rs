//! # Storage Layer
//!
//! Read-only data and configuration for liuyao.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Line texts | JSON (index → six strings) | built in, or `corpus = "..."` |
//! | Config | TOML | `--config <PATH>` or `<config dir>/liuyao/config.toml` |
//!
//! ## Key Types
//!
//! - [`Corpus`] - Line texts keyed by hexagram index
//! - [`Config`] - User configuration

mod corpus;
mod config;

pub use corpus::{Corpus, CorpusError};
pub use config::{Config, ConfigError};
