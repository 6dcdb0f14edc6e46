//! Investment lifecycle integration tests.
//!
//! Covers the status machine through the handlers and the compare-and-set
//! guarantee under concurrent writers.

use std::sync::Arc;

use wealth_coach::adapters::memory::{InMemoryInvestmentLedger, InMemoryProfileStore};
use wealth_coach::application::handlers::{
    CreateInvestmentCommand, CreateInvestmentHandler, GetInvestmentSummaryHandler,
    GetInvestmentSummaryQuery, UpdateInvestmentStatusCommand, UpdateInvestmentStatusHandler,
};
use wealth_coach::domain::foundation::{ClientId, InvestmentId};
use wealth_coach::domain::investment::{InvestmentError, InvestmentStatus};
use wealth_coach::domain::profile::ClientProfile;
use wealth_coach::ports::InvestmentLedger;

use InvestmentStatus::{Active, Matured, Withdrawn};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Desk {
    profiles: Arc<InMemoryProfileStore>,
    ledger: Arc<InMemoryInvestmentLedger>,
    client_id: ClientId,
}

impl Desk {
    async fn new() -> Self {
        let profiles = Arc::new(InMemoryProfileStore::new());
        let client_id = ClientId::new("client-1").unwrap();
        profiles
            .upsert(ClientProfile::new(client_id.clone(), "Asha", Vec::new()))
            .await;
        Self {
            profiles,
            ledger: Arc::new(InMemoryInvestmentLedger::new()),
            client_id,
        }
    }

    async fn open(&self, kind: &str, amount: f64) -> InvestmentId {
        CreateInvestmentHandler::new(self.profiles.clone(), self.ledger.clone())
            .handle(CreateInvestmentCommand {
                client_id: self.client_id.clone(),
                investment_type: kind.to_string(),
                amount,
                start_date: None,
                source: Some("branch".to_string()),
                returns: None,
            })
            .await
            .unwrap()
            .investment
            .id
    }

    fn updater(&self) -> UpdateInvestmentStatusHandler {
        UpdateInvestmentStatusHandler::new(self.ledger.clone())
    }

    async fn move_to(
        &self,
        id: InvestmentId,
        expected: InvestmentStatus,
        target: InvestmentStatus,
        returns: Option<f64>,
    ) -> Result<InvestmentStatus, InvestmentError> {
        self.updater()
            .handle(UpdateInvestmentStatusCommand {
                investment_id: id,
                expected,
                target,
                remarks: Some(format!("{} -> {}", expected, target)),
                returns,
            })
            .await
            .map(|result| result.investment.status)
    }

    async fn status_of(&self, id: InvestmentId) -> InvestmentStatus {
        self.ledger.find_by_id(&id).await.unwrap().unwrap().status
    }
}

// =============================================================================
// Status machine
// =============================================================================

#[tokio::test]
async fn matured_investment_cannot_be_withdrawn() {
    let desk = Desk::new().await;
    let id = desk.open("fixed-deposit", 5000.0).await;

    assert_eq!(desk.move_to(id, Active, Matured, Some(350.0)).await, Ok(Matured));
    let result = desk.move_to(id, Matured, Withdrawn, None).await;

    assert_eq!(
        result,
        Err(InvestmentError::InvalidTransition {
            from: Matured,
            to: Withdrawn
        })
    );
    assert_eq!(desk.status_of(id).await, Matured);
}

#[tokio::test]
async fn withdrawn_investment_cannot_mature() {
    let desk = Desk::new().await;
    let id = desk.open("gold", 2000.0).await;
    desk.move_to(id, Active, Withdrawn, None).await.unwrap();

    let result = desk.move_to(id, Withdrawn, Matured, None).await;

    assert!(matches!(result, Err(InvestmentError::InvalidTransition { .. })));
    assert_eq!(desk.status_of(id).await, Withdrawn);
}

#[tokio::test]
async fn stale_expected_status_is_a_conflict() {
    let desk = Desk::new().await;
    let id = desk.open("bonds", 1000.0).await;
    desk.move_to(id, Active, Matured, None).await.unwrap();

    let result = desk.move_to(id, Active, Withdrawn, None).await;

    assert_eq!(
        result,
        Err(InvestmentError::Conflict {
            expected: Active,
            actual: Matured
        })
    );
}

#[tokio::test]
async fn unknown_investment_is_not_found() {
    let desk = Desk::new().await;
    let missing = InvestmentId::new();

    let result = desk.move_to(missing, Active, Matured, None).await;

    assert_eq!(result, Err(InvestmentError::NotFound(missing)));
}

#[tokio::test]
async fn transition_keeps_audit_trail() {
    let desk = Desk::new().await;
    let id = desk.open("stocks", 800.0).await;
    desk.move_to(id, Active, Withdrawn, Some(-40.0)).await.unwrap();

    let record = desk.ledger.find_by_id(&id).await.unwrap().unwrap();

    assert_eq!(record.history.len(), 1);
    assert_eq!(record.history[0].from, Active);
    assert_eq!(record.history[0].to, Withdrawn);
    assert_eq!(record.history[0].remarks.as_deref(), Some("active -> withdrawn"));
    assert!(record.return_rate() < 0.0);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_transitions_from_active_have_one_winner() {
    let desk = Arc::new(Desk::new().await);
    let id = desk.open("mutual-funds", 10_000.0).await;

    let mut tasks = Vec::new();
    for target in [Matured, Withdrawn, Matured, Withdrawn] {
        let desk = desk.clone();
        tasks.push(tokio::spawn(async move {
            desk.move_to(id, Active, target, None).await
        }));
    }

    let mut winners = Vec::new();
    let mut conflicts = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(status) => winners.push(status),
            Err(InvestmentError::Conflict { expected, .. }) => {
                assert_eq!(expected, Active);
                conflicts += 1;
            }
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(conflicts, 3);
    assert_eq!(desk.status_of(id).await, winners[0]);
    let record = desk.ledger.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(record.history.len(), 1);
}

// =============================================================================
// Summary
// =============================================================================

#[tokio::test]
async fn summary_counts_by_status() {
    let desk = Desk::new().await;
    let a = desk.open("fixed-deposit", 1000.0).await;
    let b = desk.open("gold", 500.0).await;
    desk.open("bonds", 250.0).await;
    desk.move_to(a, Active, Matured, Some(80.0)).await.unwrap();
    desk.move_to(b, Active, Withdrawn, None).await.unwrap();

    let result = GetInvestmentSummaryHandler::new(desk.profiles.clone(), desk.ledger.clone())
        .handle(GetInvestmentSummaryQuery {
            client_id: desk.client_id.clone(),
        })
        .await
        .unwrap();

    assert_eq!(result.summary.active, 1);
    assert_eq!(result.summary.matured, 1);
    assert_eq!(result.summary.withdrawn, 1);
    assert_eq!(result.investments.len(), 3);
}
