//! In-Memory Profile Store
//!
//! Holds client profiles in memory. Used by tests and by development runs
//! without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ClientId, DomainError};
use crate::domain::profile::ClientProfile;
use crate::ports::ProfileReader;

/// In-memory client profiles
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<HashMap<ClientId, ClientProfile>>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a profile (seeding and tests)
    pub async fn upsert(&self, profile: ClientProfile) {
        self.profiles
            .write()
            .await
            .insert(profile.id.clone(), profile);
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl ProfileReader for InMemoryProfileStore {
    async fn find_by_id(&self, client_id: &ClientId) -> Result<Option<ClientProfile>, DomainError> {
        Ok(self.profiles.read().await.get(client_id).cloned())
    }
}
