//! Error taxonomy for the countdown timer
//!
//! Every failure is caught at the boundary of the operation that produced it
//! and turned into a log line plus a safe fallback. None of these errors are
//! allowed to end the UI event loop.

use crate::input::TimeField;
use std::path::Path;

/// Why the time fields could not be turned into a countdown
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{field} field is not a number: {value:?}")]
    NotANumber { field: TimeField, value: String },

    #[error("Time must be greater than 0")]
    ZeroDuration,

    #[error("Total duration does not fit in a countdown")]
    OutOfRange,
}

/// Top-level timer error
#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Failed to load {resource}: {reason}")]
    ResourceLoad { resource: String, reason: String },

    #[error("Scheduling failed: {0}")]
    Scheduling(String),

    #[error("Audio playback failed: {0}")]
    Playback(String),
}

impl TimerError {
    pub fn resource(path: &Path, reason: impl std::fmt::Display) -> Self {
        TimerError::ResourceLoad {
            resource: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TimerError>;
