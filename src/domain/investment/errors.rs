//! Investment-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | NotFound | 404 |
//! | ClientNotFound | 404 |
//! | InvalidTransition | 422 |
//! | Conflict | 409 |
//! | Unavailable | 503 |

use crate::domain::foundation::{
    ClientId, DomainError, ErrorCode, InvestmentId, TransitionError, ValidationError,
};

use super::InvestmentStatus;

/// Errors raised by investment operations.
#[derive(Debug, Clone, PartialEq)]
pub enum InvestmentError {
    /// Malformed or out-of-range input.
    Validation(ValidationError),

    /// Investment was not found.
    NotFound(InvestmentId),

    /// The owning client does not exist.
    ClientNotFound(ClientId),

    /// The status machine does not allow this transition. State unchanged.
    InvalidTransition {
        from: InvestmentStatus,
        to: InvestmentStatus,
    },

    /// The record's status is not the one the caller expected. Re-read and retry.
    Conflict {
        expected: InvestmentStatus,
        actual: InvestmentStatus,
    },

    /// A collaborator failed.
    Unavailable(String),
}

impl InvestmentError {
    pub fn invalid_transition(from: InvestmentStatus, to: InvestmentStatus) -> Self {
        InvestmentError::InvalidTransition { from, to }
    }

    pub fn conflict(expected: InvestmentStatus, actual: InvestmentStatus) -> Self {
        InvestmentError::Conflict { expected, actual }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        InvestmentError::Unavailable(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            InvestmentError::Validation(_) => ErrorCode::ValidationFailed,
            InvestmentError::NotFound(_) => ErrorCode::InvestmentNotFound,
            InvestmentError::ClientNotFound(_) => ErrorCode::ClientNotFound,
            InvestmentError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            InvestmentError::Conflict { .. } => ErrorCode::StatusConflict,
            InvestmentError::Unavailable(_) => ErrorCode::DependencyUnavailable,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            InvestmentError::Validation(err) => err.to_string(),
            InvestmentError::NotFound(id) => format!("Investment not found: {}", id),
            InvestmentError::ClientNotFound(id) => format!("Client not found: {}", id),
            InvestmentError::InvalidTransition { from, to } => {
                format!("Cannot move investment from {} to {}", from, to)
            }
            InvestmentError::Conflict { expected, actual } => format!(
                "Investment status is {} but {} was expected",
                actual, expected
            ),
            InvestmentError::Unavailable(msg) => format!("Dependency unavailable: {}", msg),
        }
    }

    /// Conflicts and collaborator failures can succeed on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            InvestmentError::Conflict { .. } | InvestmentError::Unavailable(_)
        )
    }
}

impl std::fmt::Display for InvestmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for InvestmentError {}

impl From<ValidationError> for InvestmentError {
    fn from(err: ValidationError) -> Self {
        InvestmentError::Validation(err)
    }
}

impl From<TransitionError<InvestmentStatus>> for InvestmentError {
    fn from(err: TransitionError<InvestmentStatus>) -> Self {
        InvestmentError::InvalidTransition {
            from: err.from,
            to: err.to,
        }
    }
}

impl From<DomainError> for InvestmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::StatusConflict => {
                let expected = err.details.get("expected").and_then(|s| s.parse().ok());
                let actual = err.details.get("actual").and_then(|s| s.parse().ok());
                match (expected, actual) {
                    (Some(expected), Some(actual)) => InvestmentError::Conflict { expected, actual },
                    _ => InvestmentError::Unavailable(err.to_string()),
                }
            }
            ErrorCode::ValidationFailed => InvestmentError::Validation(
                ValidationError::invalid_format("request", err.message),
            ),
            _ => InvestmentError::Unavailable(err.to_string()),
        }
    }
}

impl From<InvestmentError> for DomainError {
    fn from(err: InvestmentError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
