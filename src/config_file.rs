//! Optional configuration file
//!
//! Holds user preferences only; timer state is never written anywhere.
//! Every key is optional and a missing file simply means defaults.

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration stored in config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Play tick/tock and alarm sounds (default: true)
    pub sound_enabled: bool,
    /// Directory containing `assets/` (default: auto-detect)
    pub assets_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            assets_dir: None,
        }
    }
}

impl Config {
    /// Get the standard config file path
    ///
    /// - macOS: `~/Library/Application Support/cyber-countdown/config.toml`
    /// - Linux: `~/.config/cyber-countdown/config.toml`
    /// - Windows: `%APPDATA%\cyber-countdown\config.toml`
    ///
    /// Returns None if the platform has no config directory.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from the standard location, defaults if there is none
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                log::debug!("No platform config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Failed to read an existing file
    /// - TOML parsing fails, including unknown keys
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Configuration loaded from: {}", path.display());
        Ok(config)
    }

    /// Write the config to `path`, creating the parent directory
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        log::info!("Configuration saved to: {}", path.display());
        Ok(())
    }
}
