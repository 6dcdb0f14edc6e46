//! CreateInvestmentHandler - Command handler for opening investments.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::foundation::{ClientId, InvestmentId, Money, Timestamp, TopicTag};
use crate::domain::investment::{InvestmentError, InvestmentRecord};
use crate::ports::{InvestmentLedger, ProfileReader};

/// Command to open a new investment for a client.
#[derive(Debug, Clone)]
pub struct CreateInvestmentCommand {
    pub client_id: ClientId,
    pub investment_type: String,
    /// Principal in major currency units; must be positive.
    pub amount: f64,
    /// Defaults to now.
    pub start_date: Option<Timestamp>,
    /// Where the record came from (advisor, app, import). Defaults to "app".
    pub source: Option<String>,
    pub returns: Option<f64>,
}

/// Result of opening an investment.
#[derive(Debug, Clone)]
pub struct CreateInvestmentResult {
    pub investment: InvestmentRecord,
}

/// Handler for opening investments. New records always start `active`.
pub struct CreateInvestmentHandler {
    profiles: Arc<dyn ProfileReader>,
    ledger: Arc<dyn InvestmentLedger>,
}

impl CreateInvestmentHandler {
    pub fn new(profiles: Arc<dyn ProfileReader>, ledger: Arc<dyn InvestmentLedger>) -> Self {
        Self { profiles, ledger }
    }

    pub async fn handle(
        &self,
        cmd: CreateInvestmentCommand,
    ) -> Result<CreateInvestmentResult, InvestmentError> {
        // 1. Validate input
        let investment_type = TopicTag::new(&cmd.investment_type)?;
        let amount = Money::positive_from_major("amount", cmd.amount)?;
        let returns = cmd
            .returns
            .map(|r| Money::from_major("returns", r))
            .transpose()?;

        // 2. Client must exist
        self.profiles
            .find_by_id(&cmd.client_id)
            .await
            .map_err(|e| {
                error!(client_id = %cmd.client_id, error = %e, "Profile lookup failed");
                InvestmentError::from(e)
            })?
            .ok_or_else(|| InvestmentError::ClientNotFound(cmd.client_id.clone()))?;

        // 3. Persist
        let investment = InvestmentRecord::open(
            InvestmentId::new(),
            cmd.client_id,
            investment_type,
            amount,
            cmd.start_date.unwrap_or_else(Timestamp::now),
            cmd.source.unwrap_or_else(|| "app".to_string()),
            returns,
        );
        self.ledger.insert(&investment).await.map_err(|e| {
            error!(investment_id = %investment.id, error = %e, "Investment insert failed");
            InvestmentError::from(e)
        })?;

        debug!(
            investment_id = %investment.id,
            client_id = %investment.client_id,
            investment_type = %investment.investment_type,
            "Opened investment"
        );

        Ok(CreateInvestmentResult { investment })
    }
}
