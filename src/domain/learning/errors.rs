//! Learning-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | ClientNotFound | 404 |
//! | ContentNotFound | 404 |
//! | QuizNotFound | 404 |
//! | Unavailable | 503 |

use crate::domain::foundation::{
    ClientId, ContentId, DomainError, ErrorCode, QuizId, ValidationError,
};

/// Errors raised while recording progress or quiz attempts.
#[derive(Debug, Clone, PartialEq)]
pub enum LearningError {
    /// Malformed or out-of-range input. Never retried.
    Validation(ValidationError),

    /// The client does not exist in the profile store.
    ClientNotFound(ClientId),

    /// The content item does not exist in the catalog.
    ContentNotFound(ContentId),

    /// The quiz does not exist in the catalog.
    QuizNotFound(QuizId),

    /// A collaborator (store, ledger, catalog) failed.
    Unavailable(String),
}

impl LearningError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        LearningError::Unavailable(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            LearningError::Validation(_) => ErrorCode::ValidationFailed,
            LearningError::ClientNotFound(_) => ErrorCode::ClientNotFound,
            LearningError::ContentNotFound(_) => ErrorCode::ContentNotFound,
            LearningError::QuizNotFound(_) => ErrorCode::QuizNotFound,
            LearningError::Unavailable(_) => ErrorCode::DependencyUnavailable,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            LearningError::Validation(err) => err.to_string(),
            LearningError::ClientNotFound(id) => format!("Client not found: {}", id),
            LearningError::ContentNotFound(id) => format!("Content not found: {}", id),
            LearningError::QuizNotFound(id) => format!("Quiz not found: {}", id),
            LearningError::Unavailable(msg) => format!("Dependency unavailable: {}", msg),
        }
    }

    /// Returns true if the caller may retry the same request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LearningError::Unavailable(_))
    }
}

impl std::fmt::Display for LearningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LearningError {}

impl From<ValidationError> for LearningError {
    fn from(err: ValidationError) -> Self {
        LearningError::Validation(err)
    }
}

impl From<DomainError> for LearningError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => LearningError::Validation(
                ValidationError::invalid_format("request", err.message),
            ),
            _ => LearningError::Unavailable(err.to_string()),
        }
    }
}

impl From<LearningError> for DomainError {
    fn from(err: LearningError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_validation_code() {
        let err: LearningError = ValidationError::not_finite("completion").into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(!err.is_retryable());
    }

    #[test]
    fn not_found_variants_have_specific_codes() {
        let client = LearningError::ClientNotFound(ClientId::new("c-1").unwrap());
        let content = LearningError::ContentNotFound(ContentId::new("x").unwrap());
        assert_eq!(client.code(), ErrorCode::ClientNotFound);
        assert_eq!(content.code(), ErrorCode::ContentNotFound);
        assert_eq!(content.message(), "Content not found: x");
    }

    #[test]
    fn database_failures_become_retryable_unavailable() {
        let err: LearningError = DomainError::database("pool timed out").into();
        assert!(matches!(err, LearningError::Unavailable(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn converts_back_to_domain_error() {
        let err = LearningError::QuizNotFound(QuizId::new("q").unwrap());
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::QuizNotFound);
    }
}
