// Library interface for Cyber Countdown
// This allows tests and the binary to access the crate's functionality

pub mod assets;
pub mod audio;
pub mod config;
pub mod config_file;
pub mod constants;
pub mod controller;
pub mod display;
pub mod error;
pub mod input;
pub mod interval;
pub mod timer_state;
pub mod ui;

use audio::{AudioBackend, AudioFeedback, RodioBackend, SoundBank};
use controller::TimerController;
use interval::DeadlineTimer;
use log::{error, info};
use std::path::Path;

/// Settings the binary resolves from flags, environment and config file
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub sound_enabled: bool,
}

/// Open the audio device and load the sounds
///
/// Returns silent feedback if the device cannot be opened.
pub fn init_audio(resource_root: &Path, enabled: bool) -> AudioFeedback {
    let sounds = SoundBank::load(resource_root);
    match RodioBackend::open(sounds) {
        Ok(backend) => {
            info!("Audio output initialized successfully.");
            let backend: Box<dyn AudioBackend> = Box::new(backend);
            AudioFeedback::new(Some(backend), enabled)
        }
        Err(e) => {
            error!("Error initializing audio output: {}", e);
            AudioFeedback::new(None, enabled)
        }
    }
}

/// Build the controller the window drives
pub fn build_controller(
    resource_root: &Path,
    settings: &LaunchSettings,
) -> TimerController<DeadlineTimer> {
    let audio = init_audio(resource_root, settings.sound_enabled);
    TimerController::new(DeadlineTimer::new(), audio)
}
