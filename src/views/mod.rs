//! Per-page query definitions
//!
//! Each list page of the console supplies only its field mappings here; the
//! filtering, comparison and clamping semantics live once in
//! [`crate::query`]. A page takes its constructor's query, feeds user input
//! into it with the builder methods, and runs it against the fetched
//! collection.

pub mod summary;

use std::cmp::Ordering;

use smallvec::{SmallVec, smallvec};

use crate::config::CareviewConfig;
use crate::models::{Caregiver, Invoice, Patient, TimeLog, TrainingModule, Visit};
use crate::query::{ListQuery, SortDirection};

/// Case-insensitive total order for name-like columns
fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// Optional wire fields search as empty strings.
fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// The caregiver directory
///
/// Searchable by name, email, phone and specialization; sorted by name.
#[must_use]
pub fn caregiver_directory(config: &CareviewConfig) -> ListQuery<Caregiver> {
    ListQuery::new(config.default_page_size)
        .search_fields(|caregiver: &Caregiver| -> SmallVec<[String; 4]> {
            smallvec![
                caregiver.full_name(),
                caregiver.email.clone(),
                text(&caregiver.phone),
                text(&caregiver.specialization),
            ]
        })
        .sort_by(
            |a, b| cmp_text(&a.full_name(), &b.full_name()),
            SortDirection::Asc,
        )
}

/// The patient roster
///
/// Searchable by name, email, phone and address; sorted by name.
#[must_use]
pub fn patient_roster(config: &CareviewConfig) -> ListQuery<Patient> {
    ListQuery::new(config.default_page_size)
        .search_fields(|patient: &Patient| -> SmallVec<[String; 4]> {
            smallvec![
                patient.full_name(),
                text(&patient.email),
                text(&patient.phone),
                text(&patient.address),
            ]
        })
        .sort_by(
            |a, b| cmp_text(&a.full_name(), &b.full_name()),
            SortDirection::Asc,
        )
}

/// The visit schedule
///
/// Searchable by caregiver, patient and status; filterable to one calendar
/// day; sorted chronologically.
#[must_use]
pub fn visit_schedule(config: &CareviewConfig) -> ListQuery<Visit> {
    ListQuery::new(config.default_page_size)
        .search_fields(|visit: &Visit| -> SmallVec<[String; 4]> {
            smallvec![
                visit.caregiver_name.clone(),
                visit.patient_name.clone(),
                visit.status.to_string(),
            ]
        })
        .date_accessor(|visit| Some(visit.date))
        .sort_by(
            |a, b| (a.date, &a.start_time).cmp(&(b.date, &b.start_time)),
            SortDirection::Asc,
        )
}

/// The invoice ledger
///
/// Searchable by number, patient and status; filterable by issue day;
/// newest first.
#[must_use]
pub fn invoice_ledger(config: &CareviewConfig) -> ListQuery<Invoice> {
    ListQuery::new(config.default_page_size)
        .search_fields(|invoice: &Invoice| -> SmallVec<[String; 4]> {
            smallvec![
                invoice.number.clone(),
                invoice.patient_name.clone(),
                invoice.status.to_string(),
            ]
        })
        .date_accessor(|invoice| Some(invoice.issued_on))
        .sort_by(|a, b| a.issued_on.cmp(&b.issued_on), SortDirection::Desc)
}

/// The training catalog
///
/// Searchable by title, category and description; sorted by title.
#[must_use]
pub fn training_catalog(config: &CareviewConfig) -> ListQuery<TrainingModule> {
    ListQuery::new(config.default_page_size)
        .search_fields(|module: &TrainingModule| -> SmallVec<[String; 4]> {
            smallvec![
                module.title.clone(),
                text(&module.category),
                text(&module.description),
            ]
        })
        .sort_by(|a, b| cmp_text(&a.title, &b.title), SortDirection::Asc)
}

/// The time sheet
///
/// Searchable by caregiver and notes; filterable to one calendar day; most
/// recent shift first.
#[must_use]
pub fn time_sheet(config: &CareviewConfig) -> ListQuery<TimeLog> {
    ListQuery::new(config.default_page_size)
        .search_fields(|log: &TimeLog| -> SmallVec<[String; 4]> {
            smallvec![log.caregiver_name.clone(), text(&log.notes)]
        })
        .date_accessor(|log| Some(log.date))
        .sort_by(
            |a, b| (a.date, &a.start_time).cmp(&(b.date, &b.start_time)),
            SortDirection::Desc,
        )
}
