//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::output::OutputFormat;

/// Get default config file path
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("foodweb")
        .join("config.toml")
}

/// Configuration for the CLI
///
/// Mode keys only switch modes on; a flag on the command line always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub basic: bool,
    pub debug: bool,
    pub quiet: bool,
    pub format: OutputFormat,
}

impl Config {
    /// Load from an explicit path, or from the default path if it exists
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = config_file_path();
                if !default.exists() {
                    tracing::debug!("No config file at {:?}, using defaults", default);
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
