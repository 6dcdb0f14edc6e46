//! In-Memory Investment Ledger
//!
//! Compare-and-set runs under the write lock, so two writers expecting the
//! same status are serialized and only the first one lands.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, InvestmentId};
use crate::domain::investment::{InvestmentRecord, InvestmentStatus};
use crate::ports::{status_conflict, InvestmentLedger};

/// In-memory investment records keyed by id
#[derive(Debug, Clone, Default)]
pub struct InMemoryInvestmentLedger {
    records: Arc<RwLock<HashMap<InvestmentId, InvestmentRecord>>>,
}

impl InMemoryInvestmentLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvestmentLedger for InMemoryInvestmentLedger {
    async fn insert(&self, record: &InvestmentRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Investment {} already exists", record.id),
            ));
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &InvestmentId) -> Result<Option<InvestmentRecord>, DomainError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn list_for_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<InvestmentRecord>, DomainError> {
        let records = self.records.read().await;
        let mut owned: Vec<InvestmentRecord> = records
            .values()
            .filter(|r| &r.client_id == client_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn compare_and_set_status(
        &self,
        record: &InvestmentRecord,
        expected: InvestmentStatus,
    ) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let stored = records.get_mut(&record.id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvestmentNotFound,
                format!("Investment not found: {}", record.id),
            )
        })?;
        if stored.status != expected {
            return Err(status_conflict(&record.id, expected, stored.status));
        }
        *stored = record.clone();
        Ok(())
    }
}
