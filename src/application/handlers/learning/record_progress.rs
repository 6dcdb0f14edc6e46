//! RecordProgressHandler - Command handler for learning-content progress.
//!
//! Progress is append-only: every report becomes a new history entry and the
//! authoritative completion is the maximum ever reported. A lower report
//! never regresses progress.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::foundation::{
    ClientId, ContentId, DomainError, Metadata, Percentage, Timestamp,
};
use crate::domain::learning::{authoritative_completion, LearningError, LearningHistoryEntry};
use crate::ports::{ActivityLedger, LearningCatalog, ProfileReader};

/// Command to record progress on a content item.
#[derive(Debug, Clone)]
pub struct RecordProgressCommand {
    pub client_id: ClientId,
    pub content_id: ContentId,
    /// Reported completion, must be within [0, 100].
    pub completion: f64,
    pub extra: Metadata,
}

/// Result of recording progress.
#[derive(Debug, Clone)]
pub struct RecordProgressResult {
    pub entry: LearningHistoryEntry,
    /// Take-max completion after this entry.
    pub authoritative_completion: Percentage,
}

/// Handler for recording learning progress.
pub struct RecordProgressHandler {
    profiles: Arc<dyn ProfileReader>,
    catalog: Arc<dyn LearningCatalog>,
    ledger: Arc<dyn ActivityLedger>,
}

impl RecordProgressHandler {
    pub fn new(
        profiles: Arc<dyn ProfileReader>,
        catalog: Arc<dyn LearningCatalog>,
        ledger: Arc<dyn ActivityLedger>,
    ) -> Self {
        Self {
            profiles,
            catalog,
            ledger,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordProgressCommand,
    ) -> Result<RecordProgressResult, LearningError> {
        // 1. Validate before touching any collaborator
        let completion = Percentage::try_new("completion", cmd.completion)?;

        // 2. Client and content must exist
        self.profiles
            .find_by_id(&cmd.client_id)
            .await
            .map_err(|e| unavailable("profile lookup", e))?
            .ok_or_else(|| LearningError::ClientNotFound(cmd.client_id.clone()))?;

        let content = self
            .catalog
            .find_content(&cmd.content_id)
            .await
            .map_err(|e| unavailable("catalog lookup", e))?
            .ok_or_else(|| LearningError::ContentNotFound(cmd.content_id.clone()))?;

        // 3. Append, stamped with the server clock
        let entry = LearningHistoryEntry::new(&content, completion, Timestamp::now(), cmd.extra);
        self.ledger
            .append_learning_entry(&cmd.client_id, &entry)
            .await
            .map_err(|e| unavailable("activity append", e))?;

        // 4. Read back the take-max view
        let snapshot = self
            .ledger
            .snapshot(&cmd.client_id)
            .await
            .map_err(|e| unavailable("activity snapshot", e))?;
        let authoritative = authoritative_completion(&snapshot.learning_history, &cmd.content_id)
            .unwrap_or(completion);

        debug!(
            client_id = %cmd.client_id,
            content_id = %cmd.content_id,
            completion = completion.value(),
            authoritative = authoritative.value(),
            "Recorded learning progress"
        );

        Ok(RecordProgressResult {
            entry,
            authoritative_completion: authoritative,
        })
    }
}

fn unavailable(operation: &str, err: DomainError) -> LearningError {
    error!(operation, error = %err, "Learning collaborator failed");
    LearningError::from(err)
}
