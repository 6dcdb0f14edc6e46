//! Suggestion-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | ClientNotFound | 404 |
//! | Unavailable | 503 |

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, ValidationError};

/// Errors raised while producing suggestions. Never a partial list.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionError {
    /// Malformed request input.
    Validation(ValidationError),

    /// The client has no profile.
    ClientNotFound(ClientId),

    /// A collaborator (profile, catalog or ledger) failed.
    Unavailable(String),
}

impl SuggestionError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        SuggestionError::Unavailable(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SuggestionError::Validation(_) => ErrorCode::ValidationFailed,
            SuggestionError::ClientNotFound(_) => ErrorCode::ClientNotFound,
            SuggestionError::Unavailable(_) => ErrorCode::DependencyUnavailable,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            SuggestionError::Validation(err) => err.to_string(),
            SuggestionError::ClientNotFound(id) => format!("Client not found: {}", id),
            SuggestionError::Unavailable(msg) => format!("Dependency unavailable: {}", msg),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, SuggestionError::Unavailable(_))
    }
}

impl std::fmt::Display for SuggestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SuggestionError {}

impl From<ValidationError> for SuggestionError {
    fn from(err: ValidationError) -> Self {
        SuggestionError::Validation(err)
    }
}

impl From<DomainError> for SuggestionError {
    fn from(err: DomainError) -> Self {
        SuggestionError::Unavailable(err.to_string())
    }
}

impl From<SuggestionError> for DomainError {
    fn from(err: SuggestionError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
