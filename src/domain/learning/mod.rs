//! Learning domain module.
//!
//! Quiz attempts and learning-content history that together form a
//! client's activity ledger.
//!
//! # Module Structure
//!
//! - `catalog` - Content items and quizzes with their topic tags
//! - `quiz_attempt` - Immutable quiz attempt records
//! - `history` - Learning history entries and the take-max progress view
//! - `errors` - LearningError

mod catalog;
mod errors;
mod history;
mod quiz_attempt;

pub use catalog::{ContentItem, QuizItem};
pub use errors::LearningError;
pub use history::{
    authoritative_completion, authoritative_progress, ContentProgress, LearningHistoryEntry,
};
pub use quiz_attempt::{QuizAnswer, QuizAttempt};

/// A consistent read of one client's activity ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivitySnapshot {
    pub quiz_attempts: Vec<QuizAttempt>,
    pub learning_history: Vec<LearningHistoryEntry>,
}

impl ActivitySnapshot {
    pub fn is_empty(&self) -> bool {
        self.quiz_attempts.is_empty() && self.learning_history.is_empty()
    }
}
