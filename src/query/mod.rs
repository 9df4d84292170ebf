//! Generic list-query pipeline
//!
//! Every list page of the admin console (caregivers, patients, visits,
//! invoices, trainings, time logs) derives its visible rows the same way:
//! free-text filter, optional calendar-day filter, stable directional sort,
//! clamped pagination. This module implements that derivation once, generic
//! over the record type; each view supplies only its field accessors (see
//! [`crate::views`]).

mod definition;
mod page;
mod pipeline;

pub use definition::{Comparator, DateAccessor, ListQuery, SearchFields, SortDirection};
pub use pipeline::{QueryError, QueryResult, run_query};
