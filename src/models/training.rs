//! Training-module entity definition.

use serde::{Deserialize, Serialize};

use crate::quiz::{QuizError, QuizQuestion, QuizSubmission, score};

/// A training module caregivers complete, with its end-of-module quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingModule {
    /// Backend identifier
    pub id: String,
    /// Module title
    pub title: String,
    /// Short description shown in the catalog
    pub description: Option<String>,
    /// Catalog category (safety, medication, ...)
    pub category: Option<String>,
    /// Quiz questions, in presentation order
    pub questions: Vec<QuizQuestion>,
}

impl TrainingModule {
    /// The module's answer key, in question order
    #[must_use]
    pub fn answer_key(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Score a caregiver's submission against this module's key
    ///
    /// # Errors
    /// Returns [`QuizError::EmptyAnswerKey`] for a module without questions.
    pub fn grade(&self, submission: &QuizSubmission) -> Result<f64, QuizError> {
        score(self.answer_key(), submission)
    }
}
