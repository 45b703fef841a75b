//! Questionnaire error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised by questionnaire operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    /// The caller named an issue that is not in the catalog.
    /// Carries the rejected key (empty when none was supplied).
    #[error("Invalid issue selected.")]
    InvalidIssue(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl QuestionnaireError {
    pub fn code(&self) -> ErrorCode {
        match self {
            QuestionnaireError::InvalidIssue(_) => ErrorCode::InvalidIssue,
            QuestionnaireError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}
