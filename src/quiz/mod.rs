//! Quiz scoring for training modules
//!
//! A training module carries an ordered answer key; a submission maps
//! question ids to the option the caregiver selected. The scorer reports a
//! raw percentage. Whether that percentage passes is a policy decision made
//! by the caller via [`crate::config::CareviewConfig::is_passing`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Errors for invalid scoring input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    /// An answer key with no questions cannot be scored
    #[error("answer key contains no questions")]
    EmptyAnswerKey,
}

/// One question of a training module, including its answer key entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Question identifier, unique within its module
    pub id: String,
    /// Question text shown to the caregiver
    pub prompt: String,
    /// Options offered, in display order
    pub options: Vec<String>,
    /// The correct option, compared verbatim against submissions
    pub correct_option: String,
}

/// Selected options by question id
pub type QuizSubmission = FxHashMap<String, String>;

/// Score a submission against an answer key, as a percentage 0-100
///
/// A question counts as correct iff the submitted option equals the key's
/// option exactly (case-sensitive). Unanswered questions count as wrong;
/// submitted ids the key does not know are ignored.
///
/// # Errors
/// Returns [`QuizError::EmptyAnswerKey`] for an empty key rather than
/// silently dividing by zero.
pub fn score(key: &[QuizQuestion], submission: &QuizSubmission) -> Result<f64, QuizError> {
    if key.is_empty() {
        return Err(QuizError::EmptyAnswerKey);
    }

    let correct = key
        .iter()
        .filter(|question| submission.get(&question.id) == Some(&question.correct_option))
        .count();

    Ok(100.0 * correct as f64 / key.len() as f64)
}
