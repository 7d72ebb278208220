use crate::constants::{
    EXPIRED_MESSAGE, INVALID_INPUT_MESSAGE, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use std::fmt;

/// Format a second count as `HH:MM:SS`
///
/// Hours are not wrapped: 100 hours renders as `100:00:00`.
pub fn format_time(total_seconds: u64) -> String {
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// What the time label currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayText {
    Time(u64),
    Expired,
    InvalidInput,
}

impl Default for DisplayText {
    fn default() -> Self {
        DisplayText::Time(0)
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayText::Time(seconds) => f.write_str(&format_time(*seconds)),
            DisplayText::Expired => f.write_str(EXPIRED_MESSAGE),
            DisplayText::InvalidInput => f.write_str(INVALID_INPUT_MESSAGE),
        }
    }
}
