//! Shared application state for every HTTP area.

use std::sync::Arc;

use crate::adapters::memory::{
    InMemoryActivityLedger, InMemoryCatalog, InMemoryInvestmentLedger, InMemoryProfileStore,
};
use crate::application::handlers::{
    CreateInvestmentHandler, GetInvestmentSummaryHandler, GetProgressHandler,
    GetSuggestionsHandler, RecordProgressHandler, SubmitQuizHandler,
    UpdateInvestmentStatusHandler,
};
use crate::domain::suggestion::SuggestionEngine;
use crate::ports::{ActivityLedger, InvestmentLedger, LearningCatalog, ProfileReader};

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every dependency is Arc-wrapped. Handlers are
/// built on demand from the shared ports.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileReader>,
    pub catalog: Arc<dyn LearningCatalog>,
    pub activity: Arc<dyn ActivityLedger>,
    pub investments: Arc<dyn InvestmentLedger>,
    pub engine: SuggestionEngine,
}

impl AppState {
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

    /// State backed entirely by fresh in-memory stores.
    pub fn in_memory(engine: SuggestionEngine) -> Self {
        Self::new(
            Arc::new(InMemoryProfileStore::new()),
            Arc::new(InMemoryCatalog::new()),
            Arc::new(InMemoryActivityLedger::new()),
            Arc::new(InMemoryInvestmentLedger::new()),
            engine,
        )
    }

    pub fn record_progress_handler(&self) -> RecordProgressHandler {
        RecordProgressHandler::new(
            self.profiles.clone(),
            self.catalog.clone(),
            self.activity.clone(),
        )
    }

    pub fn get_progress_handler(&self) -> GetProgressHandler {
        GetProgressHandler::new(self.profiles.clone(), self.activity.clone())
    }

    pub fn submit_quiz_handler(&self) -> SubmitQuizHandler {
        SubmitQuizHandler::new(
            self.profiles.clone(),
            self.catalog.clone(),
            self.activity.clone(),
            self.engine.settings().passing_score,
        )
    }

    pub fn create_investment_handler(&self) -> CreateInvestmentHandler {
        CreateInvestmentHandler::new(self.profiles.clone(), self.investments.clone())
    }

    pub fn update_investment_status_handler(&self) -> UpdateInvestmentStatusHandler {
        UpdateInvestmentStatusHandler::new(self.investments.clone())
    }

    pub fn investment_summary_handler(&self) -> GetInvestmentSummaryHandler {
        GetInvestmentSummaryHandler::new(self.profiles.clone(), self.investments.clone())
    }

    pub fn suggestions_handler(&self) -> GetSuggestionsHandler {
        GetSuggestionsHandler::new(
            self.profiles.clone(),
            self.catalog.clone(),
            self.activity.clone(),
            self.investments.clone(),
            self.engine.clone(),
        )
    }
}
