//! Core list-view engine for a care-management admin console, with
//! generic filtering/sorting/pagination, shift-duration and quiz-score
//! computation, and role-gated access checks.

pub mod access;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod quiz;
pub mod session;
pub mod time;
pub mod views;

// Re-export the most common types for easier use
// Core types
pub use config::CareviewConfig;
pub use error::{CareviewError, Result};

// Query pipeline
pub use query::{ListQuery, QueryError, QueryResult, SortDirection, run_query};

// Small calculators
pub use quiz::{QuizError, QuizQuestion, QuizSubmission, score};
pub use time::{ShiftDuration, TimeError, TimeRange, compute_duration};

// Access control
pub use access::{AccessDecision, AccessGate, CurrentUser, IdentityProvider};
pub use session::{MemoryTokenStore, TokenStore};
