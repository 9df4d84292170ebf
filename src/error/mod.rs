//! Error handling for the careview engine.

use crate::query::QueryError;
use crate::quiz::QuizError;
use crate::time::TimeError;

/// Crate-level error type aggregating the component errors
///
/// The pipeline, duration and quiz components return their own narrow error
/// enums; this type exists for callers that route everything through one
/// `Result`. Access-gate failures never appear here: the gate folds them
/// into [`crate::access::AccessDecision::Denied`].
#[derive(Debug, thiserror::Error)]
pub enum CareviewError {
    /// Invalid query arguments (page size and friends)
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// Invalid or out-of-order clock times
    #[error("time error: {0}")]
    Time(#[from] TimeError),

    /// Invalid quiz input
    #[error("quiz error: {0}")]
    Quiz(#[from] QuizError),

    /// Failure reported by an external collaborator
    #[error("collaborator error: {0}")]
    External(anyhow::Error),
}

// anyhow::Error is not itself a std::error::Error, so #[from] cannot apply.
impl From<anyhow::Error> for CareviewError {
    fn from(error: anyhow::Error) -> Self {
        Self::External(error)
    }
}

/// Result type for careview operations
pub type Result<T> = std::result::Result<T, CareviewError>;
