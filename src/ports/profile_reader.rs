//! ProfileReader port for client profile lookups.

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, DomainError};
use crate::domain::profile::ClientProfile;

/// Read access to client profiles.
///
/// Profiles are owned by onboarding; this service only reads them.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Find a client profile by id.
    ///
    /// Returns `None` if the client is unknown.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on lookup failure
    async fn find_by_id(&self, client_id: &ClientId) -> Result<Option<ClientProfile>, DomainError>;
}
