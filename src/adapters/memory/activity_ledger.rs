//! In-Memory Activity Ledger

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ClientId, DomainError};
use crate::domain::learning::{ActivitySnapshot, LearningHistoryEntry, QuizAttempt};
use crate::ports::ActivityLedger;

/// Append-only activity per client
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityLedger {
    entries: Arc<RwLock<HashMap<ClientId, ActivitySnapshot>>>,
}

impl InMemoryActivityLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityLedger for InMemoryActivityLedger {
    async fn append_quiz_attempt(
        &self,
        client_id: &ClientId,
        attempt: &QuizAttempt,
    ) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries
            .entry(client_id.clone())
            .or_default()
            .quiz_attempts
            .push(attempt.clone());
        Ok(())
    }

    async fn append_learning_entry(
        &self,
        client_id: &ClientId,
        entry: &LearningHistoryEntry,
    ) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries
            .entry(client_id.clone())
            .or_default()
            .learning_history
            .push(entry.clone());
        Ok(())
    }

    async fn snapshot(&self, client_id: &ClientId) -> Result<ActivitySnapshot, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .get(client_id)
            .cloned()
            .unwrap_or_default())
    }
}
