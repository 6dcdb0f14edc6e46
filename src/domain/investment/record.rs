//! Investment record aggregate.
//!
//! # Design Decisions
//!
//! - **Money in minor units**: amounts and returns are `Money` (i64), not floats
//! - **Status is the only mutation**: after creation only status transitions
//!   (with their remarks and realized returns) change a record
//! - **Audit trail**: every transition appends a `StatusChange`; remarks are
//!   never overwritten

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ClientId, InvestmentId, Money, StateMachine, Timestamp, TopicTag, TransitionError,
};

use super::InvestmentStatus;

/// One entry of an investment's status audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub from: InvestmentStatus,
    pub to: InvestmentStatus,
    pub remarks: Option<String>,
    pub changed_at: Timestamp,
}

/// Investment record - one investment held by a client.
///
/// # Invariants
///
/// - `amount` is strictly positive
/// - `status` only changes along `InvestmentStatus` transitions
/// - `history` grows by exactly one entry per successful transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentRecord {
    pub id: InvestmentId,
    pub client_id: ClientId,
    pub investment_type: TopicTag,
    pub amount: Money,
    pub start_date: Timestamp,
    pub status: InvestmentStatus,
    pub returns: Option<Money>,
    /// Where the investment was made (app, branch, partner).
    pub source: String,
    pub history: Vec<StatusChange>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl InvestmentRecord {
    /// Opens a new active investment. `amount` must already be validated positive.
    pub fn open(
        id: InvestmentId,
        client_id: ClientId,
        investment_type: TopicTag,
        amount: Money,
        start_date: Timestamp,
        source: impl Into<String>,
        returns: Option<Money>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            client_id,
            investment_type,
            amount,
            start_date,
            status: InvestmentStatus::Active,
            returns,
            source: source.into(),
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a status transition.
    ///
    /// On error the record is left untouched. On success `updated_at` is
    /// refreshed, realized returns replace the previous value when given, and
    /// the change is appended to the audit trail.
    pub fn transition(
        &mut self,
        target: InvestmentStatus,
        remarks: Option<String>,
        returns: Option<Money>,
        at: Timestamp,
    ) -> Result<&StatusChange, TransitionError<InvestmentStatus>> {
        let next = self.status.transition_to(target)?;
        let change = StatusChange {
            from: self.status,
            to: next,
            remarks,
            changed_at: at,
        };
        self.status = next;
        if returns.is_some() {
            self.returns = returns;
        }
        self.updated_at = at;
        self.history.push(change);
        Ok(&self.history[self.history.len() - 1])
    }

    pub fn is_active(&self) -> bool {
        self.status == InvestmentStatus::Active
    }

    /// Returns realized returns as a fraction of the amount (0 when unreported).
    pub fn return_rate(&self) -> f64 {
        match self.returns {
            Some(r) if self.amount.is_positive() => r.minor() as f64 / self.amount.minor() as f64,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InvestmentRecord {
        InvestmentRecord::open(
            InvestmentId::new(),
            ClientId::new("client-1").unwrap(),
            TopicTag::new("fixed-deposit").unwrap(),
            Money::from_minor(100_000),
            Timestamp::now().minus_days(30),
            "app",
            None,
        )
    }

    #[test]
    fn open_starts_active_with_empty_history() {
        let r = record();
        assert_eq!(r.status, InvestmentStatus::Active);
        assert!(r.history.is_empty());
        assert!(r.is_active());
    }

    #[test]
    fn transition_records_audit_entry() {
        let mut r = record();
        let at = Timestamp::now();
        let change = r
            .transition(InvestmentStatus::Matured, Some("term ended".into()), None, at)
            .unwrap()
            .clone();

        assert_eq!(change.from, InvestmentStatus::Active);
        assert_eq!(change.to, InvestmentStatus::Matured);
        assert_eq!(change.remarks.as_deref(), Some("term ended"));
        assert_eq!(r.updated_at, at);
        assert_eq!(r.history.len(), 1);
    }

    #[test]
    fn transition_sets_realized_returns() {
        let mut r = record();
        r.transition(
            InvestmentStatus::Matured,
            None,
            Some(Money::from_minor(7_000)),
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(r.returns, Some(Money::from_minor(7_000)));
        assert!((r.return_rate() - 0.07).abs() < 1e-9);
    }

    #[test]
    fn rejected_transition_leaves_record_unchanged() {
        let mut r = record();
        r.transition(InvestmentStatus::Matured, None, None, Timestamp::now())
            .unwrap();
        let before = r.clone();

        let err = r
            .transition(
                InvestmentStatus::Withdrawn,
                Some("too late".into()),
                Some(Money::from_minor(1)),
                Timestamp::now(),
            )
            .unwrap_err();

        assert_eq!(err.from, InvestmentStatus::Matured);
        assert_eq!(r, before);
    }

    #[test]
    fn return_rate_is_zero_without_returns() {
        assert_eq!(record().return_rate(), 0.0);
    }
}
