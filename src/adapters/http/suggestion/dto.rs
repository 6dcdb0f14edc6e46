//! Data Transfer Objects for suggestion endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Metadata;
use crate::domain::suggestion::Suggestion;

/// One ranked suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// `quiz`, `content` or `investment`.
    pub kind: String,
    pub payload: String,
    pub confidence: f64,
    pub metadata: Metadata,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(suggestion: Suggestion) -> Self {
        Self {
            kind: suggestion.kind.to_string(),
            payload: suggestion.payload,
            confidence: suggestion.confidence,
            metadata: suggestion.metadata,
        }
    }
}

/// Response for GET /api/clients/:client_id/suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub client_id: String,
    pub generated_at: DateTime<Utc>,
    pub suggestions: Vec<SuggestionResponse>,
}
