//! Hours/minutes/seconds input fields
//!
//! The fields only ever hold digits: every edit is checked with
//! [`is_valid_time_input`] and rejected edits never reach the buffer.

use crate::constants::{DEFAULT_FIELD_VALUE, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::InputError;
use std::fmt;
use std::num::IntErrorKind;

/// Accept a candidate field value only if it is empty or all ASCII digits
pub fn is_valid_time_input(candidate: &str) -> bool {
    candidate.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl TimeField {
    pub const ALL: [TimeField; 3] = [TimeField::Hours, TimeField::Minutes, TimeField::Seconds];

    fn unit_seconds(self) -> u64 {
        match self {
            TimeField::Hours => SECONDS_PER_HOUR,
            TimeField::Minutes => SECONDS_PER_MINUTE,
            TimeField::Seconds => 1,
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeField::Hours => "hours",
            TimeField::Minutes => "minutes",
            TimeField::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// The three text buffers behind the input boxes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFields {
    hours: String,
    minutes: String,
    seconds: String,
}

impl TimeFields {
    pub fn new() -> Self {
        Self {
            hours: DEFAULT_FIELD_VALUE.to_string(),
            minutes: DEFAULT_FIELD_VALUE.to_string(),
            seconds: DEFAULT_FIELD_VALUE.to_string(),
        }
    }

    pub fn get(&self, field: TimeField) -> &str {
        match field {
            TimeField::Hours => &self.hours,
            TimeField::Minutes => &self.minutes,
            TimeField::Seconds => &self.seconds,
        }
    }

    fn slot(&mut self, field: TimeField) -> &mut String {
        match field {
            TimeField::Hours => &mut self.hours,
            TimeField::Minutes => &mut self.minutes,
            TimeField::Seconds => &mut self.seconds,
        }
    }

    /// Replace a field with `candidate` if it passes validation
    ///
    /// Returns false (and keeps the old value) when the edit is rejected.
    pub fn try_edit(&mut self, field: TimeField, candidate: &str) -> bool {
        if !is_valid_time_input(candidate) {
            log::debug!("Rejected {} edit: {:?}", field, candidate);
            return false;
        }
        let slot = self.slot(field);
        slot.clear();
        slot.push_str(candidate);
        true
    }

    /// Put every field back to `"00"`
    pub fn reset(&mut self) {
        for field in TimeField::ALL {
            let slot = self.slot(field);
            slot.clear();
            slot.push_str(DEFAULT_FIELD_VALUE);
        }
    }

    /// Parse the fields into a positive countdown length in seconds
    pub fn total_seconds(&self) -> Result<u64, InputError> {
        let mut total: u64 = 0;
        for field in TimeField::ALL {
            let value = parse_field(field, self.get(field))?;
            total = value
                .checked_mul(field.unit_seconds())
                .and_then(|part| total.checked_add(part))
                .ok_or(InputError::OutOfRange)?;
        }

        if total == 0 {
            return Err(InputError::ZeroDuration);
        }
        Ok(total)
    }
}

impl Default for TimeFields {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_field(field: TimeField, value: &str) -> Result<u64, InputError> {
    value.parse::<u64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => InputError::OutOfRange,
        _ => InputError::NotANumber {
            field,
            value: value.to_string(),
        },
    })
}
