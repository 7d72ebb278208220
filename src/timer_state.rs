/// Whether the countdown is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Stopped,
    Running,
}

/// Countdown state owned by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    /// Whether the tick handler may advance the countdown
    pub running: bool,
    /// Seconds left; only the tick handler decrements it
    pub remaining_seconds: u64,
    /// true = next cue is "tick", false = "tock"
    pub tick_phase: bool,
}

impl TimerState {
    pub fn new() -> Self {
        Self {
            running: false,
            remaining_seconds: 0,
            tick_phase: true,
        }
    }

    pub fn status(&self) -> TimerStatus {
        if self.running {
            TimerStatus::Running
        } else {
            TimerStatus::Stopped
        }
    }

    /// Take one second off the countdown and return what is left
    ///
    /// Callers only decrement a positive count; hitting zero here is a bug.
    pub fn decrement(&mut self) -> u64 {
        assert!(
            self.remaining_seconds > 0,
            "countdown decremented below zero"
        );
        self.remaining_seconds -= 1;
        self.remaining_seconds
    }

    /// Return the current tick/tock phase and flip it for the next second
    pub fn advance_phase(&mut self) -> bool {
        let phase = self.tick_phase;
        self.tick_phase = !phase;
        phase
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
