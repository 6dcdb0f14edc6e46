//! Quiz attempt records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, QuizId, Timestamp, TopicTag, ValidationError};

use super::QuizItem;

/// A single submitted answer, kept for audit only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question_id: String,
    pub answer: String,
}

/// An immutable, recorded quiz attempt.
///
/// # Invariants
///
/// - `score` is finite and within 0-100
/// - `tags` are the tags of the quiz at the time of the attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub quiz_id: QuizId,
    pub score: Percentage,
    pub completed_at: Timestamp,
    pub tags: Vec<TopicTag>,
    #[serde(default)]
    pub answers: Vec<QuizAnswer>,
}

impl QuizAttempt {
    /// Builds an attempt for a catalog quiz from an externally graded score.
    ///
    /// The score is not recomputed from the answers. Scores above 100 are
    /// capped; negative, NaN or infinite scores are rejected.
    pub fn record(
        quiz: &QuizItem,
        raw_score: f64,
        answers: Vec<QuizAnswer>,
        completed_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let score = Percentage::capped("score", raw_score)?;
        Ok(Self {
            quiz_id: quiz.id.clone(),
            score,
            completed_at,
            tags: quiz.tags.clone(),
            answers,
        })
    }

    /// Returns true if the attempt reached the passing score.
    pub fn is_passing(&self, passing_score: f64) -> bool {
        self.score.value() >= passing_score
    }

    pub fn covers(&self, topic: &TopicTag) -> bool {
        self.tags.contains(topic)
    }
}
