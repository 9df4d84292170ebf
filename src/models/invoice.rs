//! Invoice entity definition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::types::InvoiceStatus;

/// An invoice issued for care delivered to a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Backend identifier
    pub id: String,
    /// Human-facing invoice number
    pub number: String,
    /// Billed patient
    pub patient_id: String,
    /// Patient display name
    pub patient_name: String,
    /// Issue date
    pub issued_on: NaiveDate,
    /// Payment due date, when issued
    pub due_on: Option<NaiveDate>,
    /// Billed amount
    pub amount: f64,
    /// Billing state
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Whether this invoice still awaits payment
    #[must_use]
    pub fn is_outstanding(&self) -> bool {
        self.status.is_outstanding()
    }
}
