//! Wellness resource and care-plan entity definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A wellness resource shared with patients and families
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessResource {
    pub id: String,
    pub title: String,
    /// Resource category (nutrition, mobility, ...)
    pub category: Option<String>,
    /// External link, if the resource lives elsewhere
    pub url: Option<String>,
    pub summary: Option<String>,
}

/// A patient's care plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    pub id: String,
    pub patient_id: String,
    pub title: String,
    /// Care goals, in priority order
    pub goals: Vec<String>,
    pub updated_on: Option<NaiveDate>,
}
