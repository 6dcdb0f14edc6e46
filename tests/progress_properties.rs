//! Property tests for append-and-take-max progress.

use std::sync::Arc;

use proptest::prelude::*;

use wealth_coach::adapters::memory::{
    InMemoryActivityLedger, InMemoryCatalog, InMemoryProfileStore,
};
use wealth_coach::application::handlers::{RecordProgressCommand, RecordProgressHandler};
use wealth_coach::domain::foundation::{
    ClientId, ContentId, Metadata, Percentage, Timestamp, TopicTag,
};
use wealth_coach::domain::learning::{
    authoritative_completion, authoritative_progress, ContentItem, LearningError,
    LearningHistoryEntry,
};
use wealth_coach::domain::profile::ClientProfile;
use wealth_coach::ports::ActivityLedger;

fn item(id: &str) -> ContentItem {
    ContentItem::new(
        ContentId::new(id).unwrap(),
        id,
        vec![TopicTag::new("budgeting").unwrap()],
    )
}

fn entry(content: &ContentItem, completion: f64) -> LearningHistoryEntry {
    LearningHistoryEntry::new(
        content,
        Percentage::try_new("completion", completion).unwrap(),
        Timestamp::now(),
        Metadata::new(),
    )
}

async fn handler() -> (RecordProgressHandler, Arc<InMemoryActivityLedger>, ClientId) {
    let client_id = ClientId::new("client-1").unwrap();
    let profiles = Arc::new(InMemoryProfileStore::new());
    profiles
        .upsert(ClientProfile::new(client_id.clone(), "Asha", Vec::new()))
        .await;
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.add_content(item("c-1")).await;
    let ledger = Arc::new(InMemoryActivityLedger::new());
    (
        RecordProgressHandler::new(profiles, catalog, ledger.clone()),
        ledger,
        client_id,
    )
}

fn command(client_id: &ClientId, completion: f64) -> RecordProgressCommand {
    RecordProgressCommand {
        client_id: client_id.clone(),
        content_id: ContentId::new("c-1").unwrap(),
        completion,
        extra: Metadata::new(),
    }
}

proptest! {
    #[test]
    fn authoritative_completion_is_the_maximum(values in prop::collection::vec(0.0f64..=100.0, 1..20)) {
        let content = item("c-1");
        let entries: Vec<_> = values.iter().map(|v| entry(&content, *v)).collect();
        let expected = values.iter().cloned().fold(f64::MIN, f64::max);

        let completion = authoritative_completion(&entries, &content.id).unwrap();
        prop_assert_eq!(completion.value(), expected);

        let view = authoritative_progress(&entries);
        prop_assert_eq!(view[&content.id].completion.value(), expected);
        prop_assert_eq!(view[&content.id].entry_count, values.len());
    }

    #[test]
    fn order_of_reports_does_not_matter(values in prop::collection::vec(0.0f64..=100.0, 1..20)) {
        let content = item("c-1");
        let forward: Vec<_> = values.iter().map(|v| entry(&content, *v)).collect();
        let backward: Vec<_> = values.iter().rev().map(|v| entry(&content, *v)).collect();

        prop_assert_eq!(
            authoritative_completion(&forward, &content.id),
            authoritative_completion(&backward, &content.id)
        );
    }

    #[test]
    fn recorded_progress_never_regresses(values in prop::collection::vec(0.0f64..=100.0, 1..12)) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let (handler, _, client_id) = handler().await;
            let mut best = f64::MIN;
            for value in &values {
                let result = handler.handle(command(&client_id, *value)).await.unwrap();
                best = best.max(*value);
                assert_eq!(result.authoritative_completion.value(), best);
            }
        });
    }

    #[test]
    fn out_of_range_completion_leaves_ledger_unchanged(
        value in prop_oneof![-1000.0f64..-0.001, 100.001f64..1000.0]
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let (handler, ledger, client_id) = handler().await;
            let result = handler.handle(command(&client_id, value)).await;
            assert!(matches!(result, Err(LearningError::Validation(_))));
            assert!(ledger.snapshot(&client_id).await.unwrap().is_empty());
        });
    }
}

#[tokio::test]
async fn nan_completion_is_rejected() {
    let (handler, ledger, client_id) = handler().await;

    let result = handler.handle(command(&client_id, f64::NAN)).await;

    assert!(matches!(result, Err(LearningError::Validation(_))));
    assert!(ledger.snapshot(&client_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn forty_then_twenty_stays_at_forty() {
    let (handler, ledger, client_id) = handler().await;

    handler.handle(command(&client_id, 40.0)).await.unwrap();
    let result = handler.handle(command(&client_id, 20.0)).await.unwrap();

    assert_eq!(result.authoritative_completion.value(), 40.0);
    let snapshot = ledger.snapshot(&client_id).await.unwrap();
    assert_eq!(snapshot.learning_history.len(), 2);
}
