//! Configuration handling for liuyao
//!
//! Configuration is read from `--config <PATH>` when given, otherwise from
//! `config.toml` in the platform config directory (for example
//! `~/.config/liuyao/config.toml`). A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;
use crate::domain::CastMethod;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Method used by `liuyao cast` (coins or time)
    pub default_method: CastMethod,

    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Line-text corpus replacing the built-in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus: Option<PathBuf>,

    /// Whether readings include the five derived hexagrams
    pub show_derived: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_method: CastMethod::Time,
            default_format: OutputFormat::Text,
            corpus: None,
            show_derived: true,
        }
    }
}

impl Config {
    /// Loads from an explicit path, or from the default location
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Returns the config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "liuyao", "liuyao").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the default config file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads and validates a config file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;

        Ok(config)
    }

    /// Parses and validates config TOML
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.default_method {
            CastMethod::Coins | CastMethod::Time => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "default_method must be 'coins' or 'time', got '{}'",
                other.as_str()
            ))),
        }
    }

    /// Saves the configuration to a path
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.default_method, CastMethod::Time);
        assert_eq!(config.default_format, OutputFormat::Text);
        assert!(config.corpus.is_none());
        assert!(config.show_derived);
    }

    #[test]
    fn parse_config() {
        let toml = r#"
default_method = "coins"
default_format = "json"
corpus = "/tmp/texts.json"
show_derived = false
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.default_method, CastMethod::Coins);
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(config.corpus, Some(PathBuf::from("/tmp/texts.json")));
        assert!(!config.show_derived);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = Config::parse("default_format = \"json\"\n").unwrap();
        assert_eq!(config.default_method, CastMethod::Time);
        assert!(config.show_derived);
    }

    #[test]
    fn manual_is_not_a_default_method() {
        let err = Config::parse("default_method = \"manual\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_method_is_a_parse_error() {
        let err = Config::parse("default_method = \"yarrow\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            default_method: CastMethod::Coins,
            show_derived: false,
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.default_method, CastMethod::Coins);
        assert!(!loaded.show_derived);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
