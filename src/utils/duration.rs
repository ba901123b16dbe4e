//! Playback time labels
//!
//! Durations are shown as `M:SS` below one hour and `H:MM:SS` from one
//! hour up. Hours are never padded, so 100 hours prints as `100:00:00`.

use std::fmt;
use std::time::Duration;

use crate::utils::error::{PlayerError, Result};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// A second count split into clock fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Split `total` seconds using floor division
    pub fn from_secs(total: u64) -> Self {
        Self {
            hours: total / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Recombine the fields, `None` on overflow
    pub fn total_secs(&self) -> Option<u64> {
        self.hours
            .checked_mul(SECONDS_PER_HOUR)?
            .checked_add(self.minutes.checked_mul(SECONDS_PER_MINUTE)?)?
            .checked_add(self.seconds)
    }
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else {
            write!(f, "{}:{:02}", self.minutes, self.seconds)
        }
    }
}

/// Format a signed second count for display
///
/// Negative values are clamped to zero and print as `0:00`.
pub fn format_duration_secs(seconds: i64) -> String {
    let seconds = u64::try_from(seconds).unwrap_or(0);
    DurationParts::from_secs(seconds).to_string()
}

/// Format a duration for display
///
/// Sub-second precision is truncated, so 59.9 seconds shows as `0:59`.
pub fn format_duration(duration: Duration) -> String {
    DurationParts::from_secs(duration.as_secs()).to_string()
}

/// Parse a label produced by [`format_duration_secs`] back into seconds
///
/// Accepts `M:SS` and `H:MM:SS`. Seconds are always two digits, as are
/// minutes when an hour field is present. Minutes and seconds must be
/// below 60.
pub fn parse_duration(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    let fields: Vec<&str> = trimmed.split(':').collect();

    let (hours, minutes, seconds) = match fields.as_slice() {
        [minutes, seconds] => (None, *minutes, *seconds),
        [hours, minutes, seconds] => (Some(*hours), *minutes, *seconds),
        _ => {
            return Err(PlayerError::invalid_input(format!(
                "'{}' is not a M:SS or H:MM:SS duration",
                trimmed
            )))
        }
    };

    let seconds = parse_field(trimmed, seconds, Some(2))?;
    let minutes = parse_field(trimmed, minutes, hours.map(|_| 2))?;
    let hours = match hours {
        Some(hours) => parse_field(trimmed, hours, None)?,
        None => 0,
    };

    if minutes >= SECONDS_PER_MINUTE || seconds >= SECONDS_PER_MINUTE {
        return Err(PlayerError::invalid_input(format!(
            "'{}' has a minute or second field of 60 or more",
            trimmed
        )));
    }

    DurationParts { hours, minutes, seconds }
        .total_secs()
        .ok_or_else(|| PlayerError::invalid_input(format!("'{}' is out of range", trimmed)))
}

fn parse_field(text: &str, field: &str, width: Option<usize>) -> Result<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PlayerError::invalid_input(format!(
            "'{}' has a non-numeric field '{}'",
            text, field
        )));
    }

    if let Some(width) = width {
        if field.len() != width {
            return Err(PlayerError::invalid_input(format!(
                "'{}' needs {} digits in field '{}'",
                text, width, field
            )));
        }
    }

    field
        .parse::<u64>()
        .map_err(|e| PlayerError::invalid_input(format!("'{}': {}", text, e)))
}
