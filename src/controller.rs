//! Countdown state machine
//!
//! Stopped --start--> Running --tick--> Running ... --tick (0 left)--> Stopped
//!
//! All methods run on the UI thread. Time is passed in explicitly so the
//! whole machine can be driven from tests without a clock or a window.

use crate::audio::AudioFeedback;
use crate::constants::TICK_INTERVAL_MS;
use crate::display::{format_time, DisplayText};
use crate::error::{Result, TimerError};
use crate::input::{TimeField, TimeFields};
use crate::interval::TickTimer;
use crate::timer_state::{TimerState, TimerStatus};
use log::{debug, error, info};
use std::time::{Duration, Instant};

pub struct TimerController<T: TickTimer> {
    state: TimerState,
    fields: TimeFields,
    display: DisplayText,
    timer: T,
    audio: AudioFeedback,
}

/// Delay between countdown ticks
const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

impl<T: TickTimer> TimerController<T> {
    pub fn new(timer: T, audio: AudioFeedback) -> Self {
        info!("Initialized countdown timer.");
        Self {
            state: TimerState::new(),
            fields: TimeFields::new(),
            display: DisplayText::default(),
            timer,
            audio,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn status(&self) -> TimerStatus {
        self.state.status()
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.state.remaining_seconds
    }

    pub fn display(&self) -> DisplayText {
        self.display
    }

    pub fn display_text(&self) -> String {
        self.display.to_string()
    }

    pub fn fields(&self) -> &TimeFields {
        &self.fields
    }

    pub fn field(&self, field: TimeField) -> &str {
        self.fields.get(field)
    }

    /// Keystroke gate for the input boxes; returns false if the edit was rejected
    pub fn edit_field(&mut self, field: TimeField, candidate: &str) -> bool {
        self.fields.try_edit(field, candidate)
    }

    pub fn sound_enabled(&self) -> bool {
        self.audio.is_enabled()
    }

    /// False when no output device could be opened
    pub fn sound_available(&self) -> bool {
        self.audio.is_available()
    }

    pub fn is_alarm_playing(&self) -> bool {
        self.audio.is_alarm_playing()
    }

    /// Time until the next tick is due, for scheduling a repaint
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    /// Start counting down from the input fields
    ///
    /// A no-op while already running. On bad input the display shows the
    /// error indicator and nothing else changes.
    pub fn start(&mut self, now: Instant) -> Result<()> {
        info!("Start button pressed.");
        if self.state.running {
            debug!("Countdown already running, ignoring start.");
            return Ok(());
        }

        let total = match self.fields.total_seconds() {
            Ok(total) => total,
            Err(e) => {
                self.display = DisplayText::InvalidInput;
                error!("Invalid input in time fields: {}", e);
                return Err(TimerError::InvalidInput(e));
            }
        };

        // Arm first so a scheduling failure leaves state and display as they were
        self.schedule_next(now)?;

        self.state.remaining_seconds = total;
        self.state.running = true;
        self.render();
        info!("Time set to {}.", format_time(total));
        Ok(())
    }

    /// Cancel the pending tick and stop. Idempotent.
    pub fn stop(&mut self) {
        if !self.state.running {
            return;
        }
        if self.timer.is_pending() {
            self.timer.cancel();
            debug!("Cancelled scheduled tick.");
        }
        self.state.running = false;
        info!("Countdown stopped.");
    }

    /// Stop, clear the countdown and the fields, and silence the alarm
    pub fn reset(&mut self) {
        info!("Reset button pressed.");
        self.stop();
        self.state.remaining_seconds = 0;
        self.display = DisplayText::Time(0);
        self.fields.reset();
        info!("Countdown reset to {}.", format_time(0));

        self.audio.stop_alarm();
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.audio.set_enabled(enabled);
    }

    /// Drive the timer from the UI loop; runs at most one tick per call
    ///
    /// Returns true if a tick ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        self.tick(now);
        true
    }

    /// One countdown second: sound, decrement, render, re-arm or expire
    fn tick(&mut self, now: Instant) {
        debug!("Tick fired.");
        if !self.state.running {
            return;
        }

        if self.state.remaining_seconds == 0 {
            self.expire();
            return;
        }

        let phase = self.state.advance_phase();
        self.audio.play_tick_tock(phase);

        let remaining = self.state.decrement();
        self.render();
        info!(
            "Time updated to {}. Remaining time: {} seconds.",
            format_time(remaining),
            remaining
        );

        if remaining == 0 {
            self.expire();
        } else if let Err(e) = self.schedule_next(now) {
            error!("Countdown halted: {}", e);
        }
    }

    fn expire(&mut self) {
        self.stop();
        self.display = DisplayText::Expired;
        info!("Countdown finished. Time's Up!");
        self.audio.start_alarm();
    }

    /// Arm the next tick; a failure leaves the timer stopped
    fn schedule_next(&mut self, now: Instant) -> Result<()> {
        match self.timer.start(now, TICK_INTERVAL) {
            Ok(()) => {
                debug!("Scheduled next tick in {:?}.", TICK_INTERVAL);
                Ok(())
            }
            Err(e) => {
                error!("Error scheduling tick: {}", e);
                self.timer.cancel();
                self.state.running = false;
                Err(e)
            }
        }
    }

    fn render(&mut self) {
        self.display = DisplayText::Time(self.state.remaining_seconds);
        debug!("Display updated to {}.", self.display);
    }
}
