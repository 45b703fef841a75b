//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised when caller input fails an explicit validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' expects {expected} entries, got {actual}")]
    CountMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Creates a count mismatch validation error.
    pub fn count_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::CountMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::CountMismatch { field, .. } => field,
        }
    }
}

/// Machine-readable error codes surfaced to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidIssue,
    ValidationFailed,
    InvalidRequestBody,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidIssue => "INVALID_ISSUE",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidRequestBody => "INVALID_REQUEST_BODY",
        };
        write!(f, "{}", s)
    }
}
