//! Data Transfer Objects for learning endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Metadata;
use crate::domain::learning::{ContentProgress, QuizAnswer, QuizAttempt};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for POST /api/clients/:client_id/progress
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordProgressRequest {
    pub content_id: String,
    /// Completion percentage, 0 to 100.
    pub completion: f64,
    /// Free-form attributes kept with the history entry.
    #[serde(default)]
    pub extra: Metadata,
}

/// Request body for POST /api/clients/:client_id/quizzes/:quiz_id/attempts
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmitQuizRequest {
    pub score: f64,
    #[serde(default)]
    pub answers: Vec<QuizAnswer>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response after recording progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecordedResponse {
    pub content_id: String,
    pub completion: f64,
    /// Highest completion ever reported for this content.
    pub authoritative_completion: f64,
    pub tags: Vec<String>,
    pub viewed_at: DateTime<Utc>,
}

/// One content item in the progress view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentProgressResponse {
    pub content_id: String,
    pub completion: f64,
    pub mastered: bool,
    pub tags: Vec<String>,
    pub last_viewed_at: DateTime<Utc>,
    pub entry_count: usize,
}

impl From<ContentProgress> for ContentProgressResponse {
    fn from(progress: ContentProgress) -> Self {
        Self {
            mastered: progress.is_mastered(),
            content_id: progress.content_id.to_string(),
            completion: progress.completion.value(),
            tags: progress.tags.iter().map(|t| t.to_string()).collect(),
            last_viewed_at: *progress.last_viewed_at.as_datetime(),
            entry_count: progress.entry_count,
        }
    }
}

/// Response for GET /api/clients/:client_id/progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub client_id: String,
    pub items: Vec<ContentProgressResponse>,
}

/// Response after a quiz submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttemptResponse {
    pub quiz_id: String,
    pub score: f64,
    pub passed: bool,
    pub tags: Vec<String>,
    pub completed_at: DateTime<Utc>,
}

impl QuizAttemptResponse {
    pub fn new(attempt: &QuizAttempt, passed: bool) -> Self {
        Self {
            quiz_id: attempt.quiz_id.to_string(),
            score: attempt.score.value(),
            passed,
            tags: attempt.tags.iter().map(|t| t.to_string()).collect(),
            completed_at: *attempt.completed_at.as_datetime(),
        }
    }
}
