//! GetProgressHandler - Query handler for a client's take-max progress view.

use std::sync::Arc;

use tracing::error;

use crate::domain::foundation::ClientId;
use crate::domain::learning::{authoritative_progress, ContentProgress, LearningError};
use crate::ports::{ActivityLedger, ProfileReader};

/// Query for a client's learning progress.
#[derive(Debug, Clone)]
pub struct GetProgressQuery {
    pub client_id: ClientId,
}

/// Authoritative progress per content item, ordered by content id.
#[derive(Debug, Clone)]
pub struct GetProgressResult {
    pub items: Vec<ContentProgress>,
}

impl GetProgressResult {
    pub fn mastered_count(&self) -> usize {
        self.items.iter().filter(|p| p.is_mastered()).count()
    }
}

/// Handler for reading learning progress.
pub struct GetProgressHandler {
    profiles: Arc<dyn ProfileReader>,
    ledger: Arc<dyn ActivityLedger>,
}

impl GetProgressHandler {
    pub fn new(profiles: Arc<dyn ProfileReader>, ledger: Arc<dyn ActivityLedger>) -> Self {
        Self { profiles, ledger }
    }

    pub async fn handle(&self, query: GetProgressQuery) -> Result<GetProgressResult, LearningError> {
        self.profiles
            .find_by_id(&query.client_id)
            .await
            .map_err(|e| {
                error!(client_id = %query.client_id, error = %e, "Profile lookup failed");
                LearningError::from(e)
            })?
            .ok_or_else(|| LearningError::ClientNotFound(query.client_id.clone()))?;

        let snapshot = self.ledger.snapshot(&query.client_id).await.map_err(|e| {
            error!(client_id = %query.client_id, error = %e, "Activity snapshot failed");
            LearningError::from(e)
        })?;

        let items = authoritative_progress(&snapshot.learning_history)
            .into_values()
            .collect();
        Ok(GetProgressResult { items })
    }
}
