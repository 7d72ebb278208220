//! Tick/tock and alarm feedback
//!
//! `AudioFeedback` decides *whether* a cue plays (user toggle, loaded clips,
//! working output device); an [`AudioBackend`] does the actual playback.
//! Every failure here is logged and swallowed, sound never interrupts the
//! countdown.

mod rodio_backend;

pub use rodio_backend::{RodioBackend, SoundBank};

use crate::error::Result;
use std::fmt;

/// A sound the timer can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Tick,
    Tock,
    Alarm,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::Tick, Cue::Tock, Cue::Alarm];

    /// Cue for the given tick phase (true = tick)
    pub fn for_phase(tick_phase: bool) -> Self {
        if tick_phase {
            Cue::Tick
        } else {
            Cue::Tock
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cue::Tick => "tick",
            Cue::Tock => "tock",
            Cue::Alarm => "alarm",
        };
        f.write_str(name)
    }
}

/// Playback device abstraction
///
/// Short cues are fire-and-forget. The looping cue has its own channel so it
/// can be stopped without touching short cues.
pub trait AudioBackend {
    /// Whether the clip for `cue` was loaded
    fn has_clip(&self, cue: Cue) -> bool;

    /// Start `cue` once without blocking
    fn play(&mut self, cue: Cue) -> Result<()>;

    /// Start `cue` on the loop channel, repeating until stopped
    fn start_loop(&mut self, cue: Cue) -> Result<()>;

    /// Halt the loop channel
    fn stop_loop(&mut self);

    /// Whether the loop channel is currently sounding
    fn is_looping(&self) -> bool;

    /// Halt every channel immediately
    fn stop_all(&mut self);
}

/// Sound policy layered over an optional backend
pub struct AudioFeedback {
    backend: Option<Box<dyn AudioBackend>>,
    enabled: bool,
}

impl AudioFeedback {
    /// `backend` is `None` when the output device could not be opened; sound
    /// then stays off for the whole session.
    pub fn new(backend: Option<Box<dyn AudioBackend>>, enabled: bool) -> Self {
        if backend.is_none() {
            log::warn!("No audio output available, sound disabled for this session");
        }
        let enabled = enabled && backend.is_some();
        Self { backend, enabled }
    }

    /// Feedback that never makes a sound
    pub fn silent() -> Self {
        Self {
            backend: None,
            enabled: false,
        }
    }

    /// Whether cues will sound; never true without an output device
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether an output device is attached at all
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled && self.backend.is_none() {
            log::warn!("Cannot enable sound, no audio output available.");
            self.enabled = false;
            return;
        }

        self.enabled = enabled;
        if enabled {
            log::info!("Sound enabled by user.");
            return;
        }

        if let Some(backend) = self.backend.as_mut() {
            backend.stop_all();
        }
        log::info!("Sound disabled by user.");
    }

    /// Play the tick or tock cue for one countdown second
    pub fn play_tick_tock(&mut self, tick_phase: bool) {
        let cue = Cue::for_phase(tick_phase);
        let Some(backend) = self.active_backend() else {
            log::debug!("Sound playback is disabled.");
            return;
        };

        if !backend.has_clip(cue) {
            log::warn!("{} sound not loaded.", cue);
            return;
        }

        match backend.play(cue) {
            Ok(()) => log::info!("Played {} sound.", cue),
            Err(e) => log::error!("Error playing {} sound: {}", cue, e),
        }
    }

    /// Start the alarm on endless loop
    pub fn start_alarm(&mut self) {
        let Some(backend) = self.active_backend() else {
            log::debug!("Sound playback is disabled, alarm stays silent.");
            return;
        };

        if !backend.has_clip(Cue::Alarm) {
            log::warn!("Alarm sound not loaded.");
            return;
        }

        match backend.start_loop(Cue::Alarm) {
            Ok(()) => log::info!("Alarm sound started on loop."),
            Err(e) => log::error!("Error starting alarm sound: {}", e),
        }
    }

    /// Halt the alarm if it is sounding
    pub fn stop_alarm(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            if backend.is_looping() {
                backend.stop_loop();
                log::info!("Alarm sound stopped.");
            }
        }
    }

    pub fn is_alarm_playing(&self) -> bool {
        self.backend.as_ref().is_some_and(|b| b.is_looping())
    }

    fn active_backend(&mut self) -> Option<&mut Box<dyn AudioBackend>> {
        if !self.enabled {
            return None;
        }
        self.backend.as_mut()
    }
}
