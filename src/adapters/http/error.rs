//! Error responses shared by every HTTP area.
//!
//! | Domain error | HTTP Status |
//! |--------------|-------------|
//! | Validation | 400 |
//! | *NotFound | 404 |
//! | InvalidTransition | 422 |
//! | Conflict | 409 |
//! | Unavailable | 503 |

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::investment::InvestmentError;
use crate::domain::learning::LearningError;
use crate::domain::suggestion::SuggestionError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::ClientNotFound
        | ErrorCode::ContentNotFound
        | ErrorCode::QuizNotFound
        | ErrorCode::InvestmentNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::StatusConflict => StatusCode::CONFLICT,
        ErrorCode::DatabaseError | ErrorCode::DependencyUnavailable => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond(code: ErrorCode, message: String, details: Option<serde_json::Value>) -> Response {
    let body = ErrorResponse {
        code: code.to_string(),
        message,
        details,
    };
    (status_for(code), Json(body)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Per-area error wrappers
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for learning endpoints.
#[derive(Debug)]
pub struct LearningApiError(pub LearningError);

impl From<LearningError> for LearningApiError {
    fn from(err: LearningError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for LearningApiError {
    fn from(err: ValidationError) -> Self {
        Self(LearningError::Validation(err))
    }
}

impl IntoResponse for LearningApiError {
    fn into_response(self) -> Response {
        let details = match &self.0 {
            LearningError::Validation(err) => Some(serde_json::json!({ "field": err.field() })),
            _ => None,
        };
        respond(self.0.code(), self.0.message(), details)
    }
}

/// API error wrapper for investment endpoints.
#[derive(Debug)]
pub struct InvestmentApiError(pub InvestmentError);

impl From<InvestmentError> for InvestmentApiError {
    fn from(err: InvestmentError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for InvestmentApiError {
    fn from(err: ValidationError) -> Self {
        Self(InvestmentError::Validation(err))
    }
}

impl IntoResponse for InvestmentApiError {
    fn into_response(self) -> Response {
        let details = match &self.0 {
            InvestmentError::Validation(err) => Some(serde_json::json!({ "field": err.field() })),
            InvestmentError::InvalidTransition { from, to } => {
                Some(serde_json::json!({ "from": from.as_str(), "to": to.as_str() }))
            }
            InvestmentError::Conflict { expected, actual } => Some(
                serde_json::json!({ "expected": expected.as_str(), "actual": actual.as_str() }),
            ),
            _ => None,
        };
        respond(self.0.code(), self.0.message(), details)
    }
}

/// API error wrapper for suggestion endpoints.
#[derive(Debug)]
pub struct SuggestionApiError(pub SuggestionError);

impl From<SuggestionError> for SuggestionApiError {
    fn from(err: SuggestionError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for SuggestionApiError {
    fn from(err: ValidationError) -> Self {
        Self(SuggestionError::Validation(err))
    }
}

impl IntoResponse for SuggestionApiError {
    fn into_response(self) -> Response {
        let details = match &self.0 {
            SuggestionError::Validation(err) => Some(serde_json::json!({ "field": err.field() })),
            _ => None,
        };
        respond(self.0.code(), self.0.message(), details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ClientId;
    use crate::domain::investment::InvestmentStatus;

    #[test]
    fn error_codes_map_to_statuses() {
        assert_eq!(status_for(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::QuizNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ErrorCode::InvalidStateTransition),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status_for(ErrorCode::StatusConflict), StatusCode::CONFLICT);
        assert_eq!(
            status_for(ErrorCode::DependencyUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn investment_conflict_responds_409() {
        let response = InvestmentApiError(InvestmentError::conflict(
            InvestmentStatus::Active,
            InvestmentStatus::Matured,
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn unknown_client_responds_404() {
        let response =
            SuggestionApiError(SuggestionError::ClientNotFound(ClientId::new("x").unwrap()))
                .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_response_omits_missing_details() {
        let body = serde_json::to_value(ErrorResponse::new("VALIDATION_FAILED", "bad")).unwrap();
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert!(body.get("details").is_none());
    }
}
