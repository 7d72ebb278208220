//! Locating and loading bundled resources
//!
//! The resource root is the directory that contains `assets/`. Bundled builds
//! ship it next to the executable; during development it is the working
//! directory.

use crate::constants::{ASSETS_DIR, ICON_PATH};
use crate::error::{Result, TimerError};
use eframe::egui::IconData;
use std::env;
use std::path::{Path, PathBuf};

/// Pick the resource root
///
/// An explicit override wins, then the executable's directory if it carries
/// `assets/`, then the current directory.
pub fn resolve_resource_root(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        log::debug!("Using resource directory override: {}", dir.display());
        return dir.to_path_buf();
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    if let Some(dir) = exe_dir {
        if dir.join(ASSETS_DIR).is_dir() {
            log::debug!("Using resource directory next to executable: {}", dir.display());
            return dir;
        }
    }

    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Decode the window icon under `resource_root`
pub fn load_icon(resource_root: &Path) -> Result<IconData> {
    let path = resource_root.join(ICON_PATH);
    if !path.exists() {
        return Err(TimerError::resource(&path, "file not found"));
    }

    let image = image::open(&path)
        .map_err(|e| TimerError::resource(&path, e))?
        .into_rgba8();
    let (width, height) = image.dimensions();

    log::info!("Custom icon loaded from {}.", path.display());
    Ok(IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

/// Like [`load_icon`], but a failure only means "use the platform default"
pub fn load_icon_or_default(resource_root: &Path) -> Option<IconData> {
    match load_icon(resource_root) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::warn!("{}. Using default icon.", e);
            None
        }
    }
}
