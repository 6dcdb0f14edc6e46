//! GetSuggestionsHandler - Query handler producing ranked suggestions.
//!
//! Gathers profile, activity, investments and catalog concurrently, then runs
//! the pure engine over that snapshot. Any collaborator failure aborts the
//! whole request; there is no partial list and no cached fallback.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::foundation::{ClientId, DomainError, Timestamp};
use crate::domain::suggestion::{Suggestion, SuggestionEngine, SuggestionError, SuggestionInput};
use crate::ports::{ActivityLedger, InvestmentLedger, LearningCatalog, ProfileReader};

/// Query for a client's suggestions.
#[derive(Debug, Clone)]
pub struct GetSuggestionsQuery {
    pub client_id: ClientId,
}

/// Ordered suggestions: quiz, then content, then investment.
#[derive(Debug, Clone)]
pub struct GetSuggestionsResult {
    pub suggestions: Vec<Suggestion>,
    pub generated_at: Timestamp,
}

/// Handler for suggestion queries.
pub struct GetSuggestionsHandler {
    profiles: Arc<dyn ProfileReader>,
    catalog: Arc<dyn LearningCatalog>,
    activity: Arc<dyn ActivityLedger>,
    investments: Arc<dyn InvestmentLedger>,
    engine: SuggestionEngine,
}

impl GetSuggestionsHandler {
    pub fn new(
        profiles: Arc<dyn ProfileReader>,
        catalog: Arc<dyn LearningCatalog>,
        activity: Arc<dyn ActivityLedger>,
        investments: Arc<dyn InvestmentLedger>,
        engine: SuggestionEngine,
    ) -> Self {
        Self {
            profiles,
            catalog,
            activity,
            investments,
            engine,
        }
    }

    pub async fn handle(
        &self,
        query: GetSuggestionsQuery,
    ) -> Result<GetSuggestionsResult, SuggestionError> {
        let client_id = &query.client_id;
        let fail = |source: &'static str| {
            move |e: DomainError| {
                error!(client_id = %client_id, source, error = %e, "Suggestion input unavailable");
                SuggestionError::from(e)
            }
        };

        let (profile, activity, investments, quizzes, content) = tokio::try_join!(
            async { self.profiles.find_by_id(client_id).await.map_err(fail("profile")) },
            async { self.activity.snapshot(client_id).await.map_err(fail("activity")) },
            async {
                self.investments
                    .list_for_client(client_id)
                    .await
                    .map_err(fail("investments"))
            },
            async { self.catalog.list_quizzes().await.map_err(fail("quiz catalog")) },
            async { self.catalog.list_content().await.map_err(fail("content catalog")) },
        )?;

        let profile = profile.ok_or_else(|| SuggestionError::ClientNotFound(client_id.clone()))?;

        let generated_at = Timestamp::now();
        let input = SuggestionInput {
            profile: &profile,
            activity: &activity,
            investments: &investments,
            quizzes: &quizzes,
            content: &content,
        };
        let suggestions = self.engine.suggest(&input, generated_at);

        debug!(
            client_id = %client_id,
            count = suggestions.len(),
            "Computed suggestions"
        );

        Ok(GetSuggestionsResult {
            suggestions,
            generated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryActivityLedger, InMemoryCatalog, InMemoryInvestmentLedger, InMemoryProfileStore,
    };
    use crate::domain::foundation::{ContentId, QuizId, TopicTag};
    use crate::domain::learning::{ContentItem, QuizItem};
    use crate::domain::profile::ClientProfile;
    use crate::domain::suggestion::SuggestionKind;
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct UnavailableCatalog;

    #[async_trait]
    impl LearningCatalog for UnavailableCatalog {
        async fn find_content(&self, _id: &ContentId) -> Result<Option<ContentItem>, DomainError> {
            Err(DomainError::database("catalog offline"))
        }

        async fn find_quiz(&self, _id: &QuizId) -> Result<Option<QuizItem>, DomainError> {
            Err(DomainError::database("catalog offline"))
        }

        async fn list_content(&self) -> Result<Vec<ContentItem>, DomainError> {
            Err(DomainError::database("catalog offline"))
        }

        async fn list_quizzes(&self) -> Result<Vec<QuizItem>, DomainError> {
            Err(DomainError::database("catalog offline"))
        }
    }

    fn client() -> ClientId {
        ClientId::new("client-1").unwrap()
    }

    async fn profiles(goals: &[&str]) -> Arc<InMemoryProfileStore> {
        let store = Arc::new(InMemoryProfileStore::new());
        store
            .upsert(ClientProfile::new(
                client(),
                "Asha",
                TopicTag::parse_all(goals.iter().copied()).unwrap(),
            ))
            .await;
        store
    }

    fn handler_with(
        profiles: Arc<InMemoryProfileStore>,
        catalog: Arc<dyn LearningCatalog>,
    ) -> GetSuggestionsHandler {
        GetSuggestionsHandler::new(
            profiles,
            catalog,
            Arc::new(InMemoryActivityLedger::new()),
            Arc::new(InMemoryInvestmentLedger::new()),
            SuggestionEngine::default(),
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn goals_drive_quiz_suggestions() {
        let handler = handler_with(profiles(&["savings"]).await, Arc::new(InMemoryCatalog::new()));
        let result = handler
            .handle(GetSuggestionsQuery { client_id: client() })
            .await
            .unwrap();

        let first = &result.suggestions[0];
        assert_eq!(first.kind, SuggestionKind::Quiz);
        assert_eq!(first.payload, "savings");
        assert_eq!(first.confidence, 1.0);
    }

    #[tokio::test]
    async fn unknown_client_is_not_found() {
        let handler = handler_with(
            Arc::new(InMemoryProfileStore::new()),
            Arc::new(InMemoryCatalog::new()),
        );
        let err = handler
            .handle(GetSuggestionsQuery { client_id: client() })
            .await
            .unwrap_err();
        assert_eq!(err, SuggestionError::ClientNotFound(client()));
    }

    #[tokio::test]
    async fn collaborator_failure_yields_no_partial_list() {
        let handler = handler_with(profiles(&["savings"]).await, Arc::new(UnavailableCatalog));
        let err = handler
            .handle(GetSuggestionsQuery { client_id: client() })
            .await
            .unwrap_err();
        assert!(matches!(err, SuggestionError::Unavailable(_)));
        assert!(err.is_retryable());
    }
}
