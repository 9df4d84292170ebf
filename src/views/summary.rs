//! Derived figures for the dashboard header cards.

use chrono::NaiveDate;
use itertools::Itertools;

use crate::models::types::VisitStatus;
use crate::models::{Invoice, Visit};

/// Visit counts per calendar day, in day order
#[must_use]
pub fn visits_per_day(visits: &[Visit]) -> Vec<(NaiveDate, usize)> {
    visits
        .iter()
        .map(|visit| visit.date)
        .counts()
        .into_iter()
        .sorted()
        .collect()
}

/// Visit counts per lifecycle state, in state order
#[must_use]
pub fn visits_by_status(visits: &[Visit]) -> Vec<(VisitStatus, usize)> {
    visits
        .iter()
        .map(|visit| visit.status)
        .counts()
        .into_iter()
        .sorted()
        .collect()
}

/// Total billed amount still awaiting payment
#[must_use]
pub fn outstanding_invoice_total(invoices: &[Invoice]) -> f64 {
    invoices
        .iter()
        .filter(|invoice| invoice.is_outstanding())
        .map(|invoice| invoice.amount)
        .sum()
}
