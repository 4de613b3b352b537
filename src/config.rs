//! Configuration loaded from `enginedesk.toml`.
//!
//! The [`EnginedeskConfig`] struct holds every configurable parameter.
//! Values missing from the file fall back to per-field defaults, and the
//! whole file is optional.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration loaded from `enginedesk.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EnginedeskConfig {
    /// Company name shown in the welcome banner.
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Blank lines emitted when clearing the screen.
    #[serde(default = "default_clear_lines")]
    pub clear_lines: u16,

    /// Whether terminal output is styled. `--no-color` overrides this.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_company_name() -> String {
    "Enginedesk".to_string()
}

fn default_clear_lines() -> u16 {
    100
}

fn default_color() -> bool {
    true
}

impl Default for EnginedeskConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            clear_lines: default_clear_lines(),
            color: default_color(),
        }
    }
}

impl EnginedeskConfig {
    /// Loads configuration from `enginedesk.toml` in the current directory,
    /// falling back to defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("enginedesk.toml"))
    }

    /// Loads configuration from an explicit path. A missing file yields the
    /// defaults; an unreadable or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str::<EnginedeskConfig>(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
