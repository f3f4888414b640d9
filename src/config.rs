// File: src/config.rs
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "#3b82f6";
pub const DEFAULT_PREFIX: &str = "custom";

/// User preferences. This file seeds the inputs on startup; generated
/// palettes themselves are never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed for the base color input.
    pub default_color: String,
    /// Seed for the variable-name prefix input.
    pub default_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
            default_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("org", "trougnouf", "nuancier")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load the config file. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self)?;
        fs::write(&path, raw).with_context(|| format!("Failed to write {}", path.display()))
    }
}
