//! ActivityLedger port - append-only quiz and learning history.
//!
//! # Design
//!
//! - **Append-only**: entries are never updated or deleted
//! - **Take-max reads**: the authoritative completion per content item is the
//!   maximum ever appended, so concurrent appends commute
//! - **Atomic appends**: an append either lands completely or not at all

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, DomainError};
use crate::domain::learning::{ActivitySnapshot, LearningHistoryEntry, QuizAttempt};

/// Append-only ledger of a client's learning activity.
#[async_trait]
pub trait ActivityLedger: Send + Sync {
    /// Append a quiz attempt.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (nothing is written)
    async fn append_quiz_attempt(
        &self,
        client_id: &ClientId,
        attempt: &QuizAttempt,
    ) -> Result<(), DomainError>;

    /// Append a learning history entry.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (nothing is written)
    async fn append_learning_entry(
        &self,
        client_id: &ClientId,
        entry: &LearningHistoryEntry,
    ) -> Result<(), DomainError>;

    /// Read every entry recorded for a client.
    ///
    /// Returns an empty snapshot for a client with no activity.
    async fn snapshot(&self, client_id: &ClientId) -> Result<ActivitySnapshot, DomainError>;
}
