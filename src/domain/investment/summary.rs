//! Investment summary: a pure fold over a client's ledger.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{Money, TopicTag};

use super::{InvestmentRecord, InvestmentStatus};

/// Aggregated view of a client's investments. Recomputed on every read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    pub active: u32,
    pub matured: u32,
    pub withdrawn: u32,
    pub total_invested: Money,
    pub total_returns: Money,
    /// `total_returns / total_invested`, 0.0 when nothing is invested.
    pub average_return_rate: f64,
}

impl InvestmentSummary {
    pub fn from_records(records: &[InvestmentRecord]) -> Self {
        let mut summary = records.iter().fold(Self::default(), |mut acc, r| {
            match r.status {
                InvestmentStatus::Active => acc.active += 1,
                InvestmentStatus::Matured => acc.matured += 1,
                InvestmentStatus::Withdrawn => acc.withdrawn += 1,
            }
            acc.total_invested = acc.total_invested + r.amount;
            acc.total_returns = acc.total_returns + r.returns.unwrap_or(Money::ZERO);
            acc
        });
        if summary.total_invested.is_positive() {
            summary.average_return_rate =
                summary.total_returns.minor() as f64 / summary.total_invested.minor() as f64;
        }
        summary
    }

    pub fn total_count(&self) -> u32 {
        self.active + self.matured + self.withdrawn
    }

    pub fn has_investments(&self) -> bool {
        self.total_count() > 0
    }
}

/// Investment types the client currently holds in active investments.
pub fn active_types(records: &[InvestmentRecord]) -> BTreeSet<TopicTag> {
    records
        .iter()
        .filter(|r| r.is_active())
        .map(|r| r.investment_type.clone())
        .collect()
}
