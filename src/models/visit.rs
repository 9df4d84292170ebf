//! Visit entity definition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::types::VisitStatus;
use crate::time::{ShiftDuration, TimeError, TimeRange, compute_duration};

/// A scheduled care visit linking a caregiver and a patient
///
/// The backend denormalizes the display names onto the visit so the
/// schedule page can render without extra lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    /// Backend identifier
    pub id: String,
    /// Assigned caregiver
    pub caregiver_id: String,
    /// Caregiver display name
    pub caregiver_name: String,
    /// Visited patient
    pub patient_id: String,
    /// Patient display name
    pub patient_name: String,
    /// Calendar day of the visit
    pub date: NaiveDate,
    /// Planned start, `"HH:MM"`
    pub start_time: String,
    /// Planned end, `"HH:MM"`
    pub end_time: String,
    /// Lifecycle state
    pub status: VisitStatus,
    /// Free-form notes
    pub notes: Option<String>,
}

impl Visit {
    /// The visit's planned clock-time window
    #[must_use]
    pub fn window(&self) -> TimeRange {
        TimeRange::new(self.start_time.clone(), self.end_time.clone())
    }

    /// Planned length of the visit
    ///
    /// # Errors
    /// Propagates [`TimeError`] for malformed or out-of-order times.
    pub fn planned_duration(&self) -> Result<ShiftDuration, TimeError> {
        compute_duration(&self.window())
    }
}
