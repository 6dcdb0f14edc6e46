//! Tunable parameters of the suggestion engine.

use chrono::Duration;
use std::collections::BTreeMap;

use crate::domain::foundation::TopicTag;
use crate::domain::profile::RiskLevel;

/// Engine tunables. Loaded from `SuggestionConfig`; tests build them directly.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionSettings {
    /// Multiplier applied per step back in quiz history (most recent = step 0).
    pub recency_decay: f64,
    /// Floor for the recency multiplier so old attempts keep some weight.
    pub min_recency_weight: f64,
    pub goal_weight: f64,
    pub quiz_weight: f64,
    pub content_weight: f64,
    /// Window after a failed attempt during which the topic is not re-suggested.
    pub quiz_cooldown: Duration,
    /// Score (0-100) at or above which a quiz attempt counts as passed.
    pub passing_score: f64,
    pub max_per_kind: usize,
    /// Return rate below which active investors get diversification suggestions.
    pub diversification_return_threshold: f64,
    /// Topics that name investment types.
    pub investment_topics: Vec<TopicTag>,
    /// Risk level per investment topic; topics not listed are `Medium`.
    pub risk_levels: BTreeMap<TopicTag, RiskLevel>,
    /// Topics used for cold-start defaults.
    pub cold_start_topics: Vec<TopicTag>,
}

impl SuggestionSettings {
    pub fn risk_level(&self, topic: &TopicTag) -> RiskLevel {
        self.risk_levels
            .get(topic)
            .copied()
            .unwrap_or(RiskLevel::Medium)
    }

    /// Recency multiplier for the attempt `step` positions back from the newest.
    pub fn recency_weight(&self, step: usize) -> f64 {
        let exponent = i32::try_from(step).unwrap_or(i32::MAX);
        self.recency_decay
            .powi(exponent)
            .max(self.min_recency_weight)
    }
}

fn tags(raw: &[&str]) -> Vec<TopicTag> {
    raw.iter().filter_map(|t| TopicTag::new(t).ok()).collect()
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        let mut risk_levels = BTreeMap::new();
        for low in tags(&["fixed-deposit", "bonds", "recurring-deposit"]) {
            risk_levels.insert(low, RiskLevel::Low);
        }
        for high in tags(&["stocks", "crypto"]) {
            risk_levels.insert(high, RiskLevel::High);
        }
        Self {
            recency_decay: 0.8,
            min_recency_weight: 0.05,
            goal_weight: 1.0,
            quiz_weight: 1.0,
            content_weight: 1.0,
            quiz_cooldown: Duration::hours(24),
            passing_score: 70.0,
            max_per_kind: 5,
            diversification_return_threshold: 0.06,
            investment_topics: tags(&[
                "fixed-deposit",
                "recurring-deposit",
                "bonds",
                "gold",
                "mutual-funds",
                "stocks",
            ]),
            risk_levels,
            cold_start_topics: tags(&["budgeting", "savings"]),
        }
    }
}
