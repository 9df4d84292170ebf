//! Domain record models for the admin console
//!
//! Typed shapes for the collections the REST backend serves. Field names
//! follow the backend's camelCase wire mapping; dates are plain calendar
//! dates and clock times are `"HH:MM"` strings, both as the API sends them.
//! The query engine treats all of these opaquely through accessors, so the
//! structs carry only the helpers the views themselves need.

pub mod caregiver;
pub mod invoice;
pub mod patient;
pub mod time_log;
pub mod training;
pub mod types;
pub mod visit;
pub mod wellness;

pub use caregiver::Caregiver;
pub use invoice::Invoice;
pub use patient::Patient;
pub use time_log::TimeLog;
pub use training::TrainingModule;
pub use types::{InvoiceStatus, VisitStatus};
pub use visit::Visit;
pub use wellness::{CarePlan, WellnessResource};
