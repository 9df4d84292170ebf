//! Caregiver entity definition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A caregiver employed by the care agency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caregiver {
    /// Backend identifier
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Work email
    pub email: String,
    /// Contact phone, if on file
    pub phone: Option<String>,
    /// Care specialization, if any (elderly care, pediatric, ...)
    pub specialization: Option<String>,
    /// Hiring date
    pub hired_on: Option<NaiveDate>,
    /// Whether the caregiver currently takes assignments
    pub active: bool,
}

impl Caregiver {
    /// Display name as the directory lists it
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
