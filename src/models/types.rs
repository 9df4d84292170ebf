//! Shared status enums for the console's records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of a scheduled visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisitStatus {
    /// Booked but not started
    Scheduled,
    /// Caregiver is on site
    InProgress,
    /// Finished normally
    Completed,
    /// Called off before completion
    Cancelled,
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Labels as the schedule page prints them
        let label = match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// Billing state of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceStatus {
    /// Not yet issued
    Draft,
    /// Issued and awaiting payment
    Sent,
    /// Settled
    Paid,
    /// Issued and past its due date
    Overdue,
}

impl InvoiceStatus {
    /// Whether the invoice still awaits payment
    #[must_use]
    pub fn is_outstanding(self) -> bool {
        matches!(self, Self::Sent | Self::Overdue)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        };
        f.write_str(label)
    }
}
