//! UpdateInvestmentStatusHandler - Command handler for status transitions.
//!
//! # Check Order
//!
//! 1. Input validation (returns must be finite)
//! 2. Record exists (`NotFound`)
//! 3. Caller's expected status equals the stored one (`Conflict`)
//! 4. Transition allowed by the status machine (`InvalidTransition`)
//! 5. Ledger compare-and-set still sees the expected status (`Conflict`)
//!
//! Nothing is written unless every step passes.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::foundation::{InvestmentId, Money, Timestamp};
use crate::domain::investment::{
    InvestmentError, InvestmentRecord, InvestmentStatus, StatusChange,
};
use crate::ports::InvestmentLedger;

/// Command to move an investment to a new status.
#[derive(Debug, Clone)]
pub struct UpdateInvestmentStatusCommand {
    pub investment_id: InvestmentId,
    /// Status the caller last read.
    pub expected: InvestmentStatus,
    pub target: InvestmentStatus,
    pub remarks: Option<String>,
    /// Realized returns in major units, recorded with the change.
    pub returns: Option<f64>,
}

/// Result of a successful transition.
#[derive(Debug, Clone)]
pub struct UpdateInvestmentStatusResult {
    pub investment: InvestmentRecord,
    pub change: StatusChange,
}

/// Handler for investment status transitions.
pub struct UpdateInvestmentStatusHandler {
    ledger: Arc<dyn InvestmentLedger>,
}

impl UpdateInvestmentStatusHandler {
    pub fn new(ledger: Arc<dyn InvestmentLedger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(
        &self,
        cmd: UpdateInvestmentStatusCommand,
    ) -> Result<UpdateInvestmentStatusResult, InvestmentError> {
        // 1. Validate input
        let returns = cmd
            .returns
            .map(|r| Money::from_major("returns", r))
            .transpose()?;

        // 2. Load the record
        let mut investment = self
            .ledger
            .find_by_id(&cmd.investment_id)
            .await
            .map_err(|e| {
                error!(investment_id = %cmd.investment_id, error = %e, "Investment lookup failed");
                InvestmentError::from(e)
            })?
            .ok_or(InvestmentError::NotFound(cmd.investment_id))?;

        // 3. Stale read
        if investment.status != cmd.expected {
            warn!(
                investment_id = %cmd.investment_id,
                expected = %cmd.expected,
                actual = %investment.status,
                "Rejected stale status update"
            );
            return Err(InvestmentError::conflict(cmd.expected, investment.status));
        }

        // 4. Status machine
        let change = investment
            .transition(cmd.target, cmd.remarks, returns, Timestamp::now())
            .map_err(|e| {
                warn!(
                    investment_id = %cmd.investment_id,
                    from = %e.from,
                    to = %e.to,
                    "Rejected invalid status transition"
                );
                InvestmentError::from(e)
            })?
            .clone();

        // 5. Compare-and-set
        self.ledger
            .compare_and_set_status(&investment, cmd.expected)
            .await
            .map_err(|e| {
                let err = InvestmentError::from(e);
                match &err {
                    InvestmentError::Conflict { .. } => warn!(
                        investment_id = %cmd.investment_id,
                        error = %err,
                        "Lost status compare-and-set"
                    ),
                    _ => error!(
                        investment_id = %cmd.investment_id,
                        error = %err,
                        "Status update failed"
                    ),
                }
                err
            })?;

        debug!(
            investment_id = %investment.id,
            from = %change.from,
            to = %change.to,
            "Investment status updated"
        );

        Ok(UpdateInvestmentStatusResult { investment, change })
    }
}
