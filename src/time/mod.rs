//! Shift-duration computation for time logs and visit windows
//!
//! Time logs record a start and end clock time on one reference day; the
//! time-sheet column displays the elapsed whole hours and minutes between
//! them. End-before-start (including equal times) is a user input error the
//! form surfaces as a validation message, never a fault.

use std::fmt;

use chrono::NaiveTime;

/// Clock-time format accepted by the console's time fields
pub const CLOCK_FORMAT: &str = "%H:%M";

/// Errors for invalid clock-time ranges
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The end time does not come after the start time
    #[error("end time must be after start time")]
    EndBeforeStart,

    /// A clock time could not be parsed
    #[error("invalid clock time '{0}'")]
    InvalidClockTime(String),
}

/// A start/end clock-time pair on one implicit reference day
///
/// Constructed fresh per computation from form input; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    /// Start time, `"HH:MM"`
    pub start: String,
    /// End time, `"HH:MM"`
    pub end: String,
}

impl TimeRange {
    /// Create a range from two clock-time strings
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Elapsed time between two same-day clock times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftDuration {
    /// Whole hours elapsed
    pub hours: u32,
    /// Remaining whole minutes, 0-59
    pub minutes: u8,
}

impl fmt::Display for ShiftDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Compute the elapsed duration of a clock-time range
///
/// Both ends are parsed onto the same reference day and the difference is
/// floored to whole minutes. Ranges crossing midnight are out of scope: the
/// end time must be strictly later on the same day.
///
/// # Errors
/// [`TimeError::InvalidClockTime`] if either time fails to parse,
/// [`TimeError::EndBeforeStart`] if `end <= start`.
pub fn compute_duration(range: &TimeRange) -> Result<ShiftDuration, TimeError> {
    compute_duration_with_format(range, CLOCK_FORMAT)
}

/// Compute a duration with an explicit clock-time format
///
/// # Errors
/// Same as [`compute_duration`].
pub fn compute_duration_with_format(
    range: &TimeRange,
    format: &str,
) -> Result<ShiftDuration, TimeError> {
    let start = parse_clock_time(&range.start, format)?;
    let end = parse_clock_time(&range.end, format)?;

    if end <= start {
        return Err(TimeError::EndBeforeStart);
    }

    let elapsed_minutes = (end - start).num_minutes();
    // end > start on one day, so this fits comfortably in u32.
    let elapsed_minutes = u32::try_from(elapsed_minutes).unwrap_or_default();

    Ok(ShiftDuration {
        hours: elapsed_minutes / 60,
        minutes: (elapsed_minutes % 60) as u8,
    })
}

fn parse_clock_time(value: &str, format: &str) -> Result<NaiveTime, TimeError> {
    NaiveTime::parse_from_str(value.trim(), format)
        .map_err(|_| TimeError::InvalidClockTime(value.to_string()))
}
