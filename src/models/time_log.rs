//! Time-log entity definition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::{ShiftDuration, TimeError, TimeRange, compute_duration};

/// One logged work shift of a caregiver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    /// Backend identifier
    pub id: String,
    /// Caregiver the shift belongs to
    pub caregiver_id: String,
    /// Caregiver display name
    pub caregiver_name: String,
    /// Calendar day of the shift
    pub date: NaiveDate,
    /// Clock-in time, `"HH:MM"`
    pub start_time: String,
    /// Clock-out time, `"HH:MM"`
    pub end_time: String,
    /// Free-form notes
    pub notes: Option<String>,
}

impl TimeLog {
    /// The logged clock-time range
    #[must_use]
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start_time.clone(), self.end_time.clone())
    }

    /// Hours and minutes worked, as the time sheet displays them
    ///
    /// # Errors
    /// Propagates [`TimeError`] for malformed or out-of-order times; the
    /// form surfaces these as validation messages.
    pub fn worked(&self) -> Result<ShiftDuration, TimeError> {
        compute_duration(&self.range())
    }
}
