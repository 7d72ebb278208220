//! One-shot tick timer polled from the UI loop
//!
//! The controller arms the timer, the UI loop polls it every frame, and the
//! controller re-arms it after each tick finishes its work. At most one
//! deadline is outstanding: arming again replaces it, cancelling clears it.

use crate::error::{Result, TimerError};
use std::time::{Duration, Instant};

/// Timer primitive consumed by the countdown controller
pub trait TickTimer {
    /// Arm the timer to fire once, `interval` after `now`
    fn start(&mut self, now: Instant, interval: Duration) -> Result<()>;

    /// Drop any pending deadline. Cancelling an idle timer is a no-op.
    fn cancel(&mut self);

    /// Whether a deadline is outstanding
    fn is_pending(&self) -> bool;

    /// Consume the deadline if it has passed. Returns true at most once per arm.
    fn poll(&mut self, now: Instant) -> bool;

    /// Time left until the pending deadline, if any
    fn time_until_due(&self, now: Instant) -> Option<Duration>;
}

/// Deadline held in memory, checked against the caller's clock
#[derive(Debug, Default)]
pub struct DeadlineTimer {
    deadline: Option<Instant>,
}

impl DeadlineTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }
}

impl TickTimer for DeadlineTimer {
    fn start(&mut self, now: Instant, interval: Duration) -> Result<()> {
        let deadline = now.checked_add(interval).ok_or_else(|| {
            TimerError::Scheduling(format!("interval {:?} overflows the clock", interval))
        })?;
        if self.deadline.replace(deadline).is_some() {
            log::debug!("Replaced pending tick deadline");
        }
        Ok(())
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
