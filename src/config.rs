//! Configuration loading from TOML.
//!
//! Reads `parlay.toml` and deserializes into strongly-typed structs. Every
//! section and field is optional; a missing file means all defaults.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "parlay.toml";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub slip: SlipConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SlipConfig {
    /// Blank rows on a fresh or reset slip.
    pub initial_rows: usize,
    /// Upper bound on rows in a slip.
    pub max_rows: usize,
}

impl Default for SlipConfig {
    fn default() -> Self {
        Self {
            initial_rows: 1,
            max_rows: 20,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "parlay=info".into(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.slip.max_rows == 0 {
            bail!("slip.max_rows must be at least 1");
        }
        if self.slip.initial_rows > self.slip.max_rows {
            bail!(
                "slip.initial_rows ({}) exceeds slip.max_rows ({})",
                self.slip.initial_rows,
                self.slip.max_rows
            );
        }
        Ok(())
    }
}
