//! Environment variable overrides
//!
//! These override settings from the config file (see config_file module)
//! and are in turn overridden by command-line flags.
//!
//! Environment variables (all optional):
//! - CYBER_COUNTDOWN_ASSETS: Directory containing `assets/`
//! - CYBER_COUNTDOWN_SOUND: `1/true/on` or `0/false/off`

use crate::constants::{ENV_ASSETS_DIR, ENV_SOUND};
use log::{debug, info, warn};
use std::env;
use std::path::PathBuf;

/// Parse the CYBER_COUNTDOWN_SOUND environment variable
///
/// Returns Some(enabled) for a recognised value, None if unset or invalid
pub fn parse_sound_override() -> Option<bool> {
    match env::var(ENV_SOUND) {
        Ok(val) => match parse_switch(&val) {
            Some(enabled) => {
                info!(
                    "Sound {} via {}",
                    if enabled { "enabled" } else { "disabled" },
                    ENV_SOUND
                );
                Some(enabled)
            }
            None => {
                warn!(
                    "Invalid {} value: {:?} (expected on/off). Ignoring.",
                    ENV_SOUND, val
                );
                None
            }
        },
        Err(_) => {
            debug!("{} not set.", ENV_SOUND);
            None
        }
    }
}

/// Parse the CYBER_COUNTDOWN_ASSETS environment variable
pub fn parse_assets_override() -> Option<PathBuf> {
    match env::var(ENV_ASSETS_DIR) {
        Ok(val) if !val.trim().is_empty() => {
            info!("Resource directory set via {}: {}", ENV_ASSETS_DIR, val);
            Some(PathBuf::from(val))
        }
        Ok(_) => {
            warn!("{} is set but empty. Ignoring.", ENV_ASSETS_DIR);
            None
        }
        Err(_) => {
            debug!("{} not set.", ENV_ASSETS_DIR);
            None
        }
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
