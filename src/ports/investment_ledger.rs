//! InvestmentLedger port - investment records and their status history.
//!
//! # Design
//!
//! - **Compare-and-set**: status changes only land when the stored status
//!   still equals the status the caller read
//! - **Audit trail**: every accepted change appends a `StatusChange`

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, InvestmentId};
use crate::domain::investment::{InvestmentRecord, InvestmentStatus};

/// Persistence for investment records.
#[async_trait]
pub trait InvestmentLedger: Send + Sync {
    /// Insert a newly opened investment.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, record: &InvestmentRecord) -> Result<(), DomainError>;

    /// Find an investment by id. Returns `None` if unknown.
    async fn find_by_id(&self, id: &InvestmentId) -> Result<Option<InvestmentRecord>, DomainError>;

    /// All investments of a client, oldest first.
    async fn list_for_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<InvestmentRecord>, DomainError>;

    /// Store `record` (already transitioned in memory) if the persisted
    /// status still equals `expected`.
    ///
    /// # Errors
    ///
    /// - `InvestmentNotFound` if the record doesn't exist
    /// - `StatusConflict` with `expected`/`actual` details when another
    ///   writer got there first (nothing is written)
    /// - `DatabaseError` on persistence failure
    async fn compare_and_set_status(
        &self,
        record: &InvestmentRecord,
        expected: InvestmentStatus,
    ) -> Result<(), DomainError>;
}

/// Builds the `StatusConflict` error a ledger reports on a lost compare-and-set.
pub fn status_conflict(
    id: &InvestmentId,
    expected: InvestmentStatus,
    actual: InvestmentStatus,
) -> DomainError {
    DomainError::new(
        ErrorCode::StatusConflict,
        format!("Investment {} is {}, expected {}", id, actual, expected),
    )
    .with_detail("expected", expected.as_str())
    .with_detail("actual", actual.as_str())
}
