//! Suggestion value type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ClientId, Metadata, MetadataValue};

/// What a suggestion points the client at. Variant order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Quiz,
    Content,
    Investment,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Quiz => "quiz",
            SuggestionKind::Content => "content",
            SuggestionKind::Investment => "investment",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ranked, explainable suggestion. Computed per request, never persisted.
///
/// # Invariants
///
/// - `confidence` is within [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub client_id: ClientId,
    pub kind: SuggestionKind,
    /// Topic tag, content id or investment type depending on `kind`.
    pub payload: String,
    pub confidence: f64,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Suggestion {
    /// Creates a suggestion, forcing the confidence into [0, 1] (NaN becomes 0).
    pub fn new(
        client_id: ClientId,
        kind: SuggestionKind,
        payload: impl Into<String>,
        confidence: f64,
        metadata: Metadata,
    ) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            client_id,
            kind,
            payload: payload.into(),
            confidence,
            metadata,
        }
    }

    /// The `source` metadata entry, if present.
    pub fn source(&self) -> Option<&str> {
        self.metadata.get("source").and_then(MetadataValue::as_text)
    }

    /// The `topic` metadata entry, if present.
    pub fn topic(&self) -> Option<&str> {
        self.metadata.get("topic").and_then(MetadataValue::as_text)
    }
}
