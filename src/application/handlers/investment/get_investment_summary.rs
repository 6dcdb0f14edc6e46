//! GetInvestmentSummaryHandler - Query handler for a client's portfolio summary.

use std::sync::Arc;

use tracing::error;

use crate::domain::foundation::ClientId;
use crate::domain::investment::{InvestmentError, InvestmentRecord, InvestmentSummary};
use crate::ports::{InvestmentLedger, ProfileReader};

/// Query for a client's investment summary.
#[derive(Debug, Clone)]
pub struct GetInvestmentSummaryQuery {
    pub client_id: ClientId,
}

/// Summary plus the records it was computed from.
#[derive(Debug, Clone)]
pub struct GetInvestmentSummaryResult {
    pub summary: InvestmentSummary,
    pub investments: Vec<InvestmentRecord>,
}

/// Handler for portfolio summaries.
pub struct GetInvestmentSummaryHandler {
    profiles: Arc<dyn ProfileReader>,
    ledger: Arc<dyn InvestmentLedger>,
}

impl GetInvestmentSummaryHandler {
    pub fn new(profiles: Arc<dyn ProfileReader>, ledger: Arc<dyn InvestmentLedger>) -> Self {
        Self { profiles, ledger }
    }

    pub async fn handle(
        &self,
        query: GetInvestmentSummaryQuery,
    ) -> Result<GetInvestmentSummaryResult, InvestmentError> {
        self.profiles
            .find_by_id(&query.client_id)
            .await
            .map_err(|e| {
                error!(client_id = %query.client_id, error = %e, "Profile lookup failed");
                InvestmentError::from(e)
            })?
            .ok_or_else(|| InvestmentError::ClientNotFound(query.client_id.clone()))?;

        let investments = self
            .ledger
            .list_for_client(&query.client_id)
            .await
            .map_err(|e| {
                error!(client_id = %query.client_id, error = %e, "Investment listing failed");
                InvestmentError::from(e)
            })?;

        Ok(GetInvestmentSummaryResult {
            summary: InvestmentSummary::from_records(&investments),
            investments,
        })
    }
}
