//! Suggestion engine configuration

use chrono::Duration;
use serde::Deserialize;
use std::collections::BTreeMap;

use super::error::ValidationError;

/// One year.
const MAX_QUIZ_COOLDOWN_HOURS: i64 = 24 * 365;
use crate::domain::foundation::TopicTag;
use crate::domain::profile::RiskLevel;
use crate::domain::suggestion::SuggestionSettings;

/// Suggestion engine tunables
///
/// Topic lists are comma-separated so they can be set from a single
/// environment variable, e.g.
/// `WEALTH_COACH__SUGGESTION__COLD_START_TOPICS=budgeting,savings`.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionConfig {
    /// Per-step decay applied to older quiz attempts
    #[serde(default = "default_recency_decay")]
    pub recency_decay: f64,

    /// Lower bound for the recency multiplier
    #[serde(default = "default_min_recency_weight")]
    pub min_recency_weight: f64,

    #[serde(default = "default_weight")]
    pub goal_weight: f64,

    #[serde(default = "default_weight")]
    pub quiz_weight: f64,

    #[serde(default = "default_weight")]
    pub content_weight: f64,

    /// Hours a failed quiz topic is held back
    #[serde(default = "default_quiz_cooldown_hours")]
    pub quiz_cooldown_hours: i64,

    /// Quiz score (0-100) that counts as passing
    #[serde(default = "default_passing_score")]
    pub passing_score: f64,

    #[serde(default = "default_max_suggestions_per_kind")]
    pub max_suggestions_per_kind: usize,

    /// Portfolio return rate below which diversification is suggested
    #[serde(default = "default_diversification_return_threshold")]
    pub diversification_return_threshold: f64,

    /// Investment type topics (comma-separated)
    #[serde(default = "default_investment_topics")]
    pub investment_topics: String,

    /// Low-risk investment topics (comma-separated)
    #[serde(default = "default_low_risk_topics")]
    pub low_risk_topics: String,

    /// High-risk investment topics (comma-separated)
    #[serde(default = "default_high_risk_topics")]
    pub high_risk_topics: String,

    /// Topics used for cold-start defaults (comma-separated)
    #[serde(default = "default_cold_start_topics")]
    pub cold_start_topics: String,
}

impl SuggestionConfig {
    pub fn investment_topics_list(&self) -> Result<Vec<TopicTag>, ValidationError> {
        parse_topics("investment_topics", &self.investment_topics)
    }

    pub fn low_risk_topics_list(&self) -> Result<Vec<TopicTag>, ValidationError> {
        parse_topics("low_risk_topics", &self.low_risk_topics)
    }

    pub fn high_risk_topics_list(&self) -> Result<Vec<TopicTag>, ValidationError> {
        parse_topics("high_risk_topics", &self.high_risk_topics)
    }

    pub fn cold_start_topics_list(&self) -> Result<Vec<TopicTag>, ValidationError> {
        parse_topics("cold_start_topics", &self.cold_start_topics)
    }

    /// Validate suggestion configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.recency_decay > 0.0 && self.recency_decay <= 1.0) {
            return Err(ValidationError::suggestion("recency_decay", "must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.min_recency_weight) {
            return Err(ValidationError::suggestion(
                "min_recency_weight",
                "must be in [0, 1]",
            ));
        }
        for (name, weight) in [
            ("goal_weight", self.goal_weight),
            ("quiz_weight", self.quiz_weight),
            ("content_weight", self.content_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ValidationError::suggestion(name, "must be finite and >= 0"));
            }
        }
        if !(0..=MAX_QUIZ_COOLDOWN_HOURS).contains(&self.quiz_cooldown_hours) {
            return Err(ValidationError::suggestion(
                "quiz_cooldown_hours",
                format!("must be in [0, {}]", MAX_QUIZ_COOLDOWN_HOURS),
            ));
        }
        if !(0.0..=100.0).contains(&self.passing_score) {
            return Err(ValidationError::suggestion("passing_score", "must be in [0, 100]"));
        }
        if self.max_suggestions_per_kind == 0 {
            return Err(ValidationError::suggestion(
                "max_suggestions_per_kind",
                "must be at least 1",
            ));
        }
        if !self.diversification_return_threshold.is_finite() {
            return Err(ValidationError::suggestion(
                "diversification_return_threshold",
                "must be finite",
            ));
        }

        let investment = self.investment_topics_list()?;
        if investment.is_empty() {
            return Err(ValidationError::MissingRequired("SUGGESTION__INVESTMENT_TOPICS"));
        }
        let low = self.low_risk_topics_list()?;
        let high = self.high_risk_topics_list()?;
        if let Some(both) = low.iter().find(|t| high.contains(t)) {
            return Err(ValidationError::suggestion(
                "high_risk_topics",
                format!("{} is also listed as low risk", both),
            ));
        }
        self.cold_start_topics_list()?;
        Ok(())
    }

    /// Convert into engine settings
    pub fn to_settings(&self) -> Result<SuggestionSettings, ValidationError> {
        self.validate()?;

        let mut risk_levels = BTreeMap::new();
        for topic in self.low_risk_topics_list()? {
            risk_levels.insert(topic, RiskLevel::Low);
        }
        for topic in self.high_risk_topics_list()? {
            risk_levels.insert(topic, RiskLevel::High);
        }

        Ok(SuggestionSettings {
            recency_decay: self.recency_decay,
            min_recency_weight: self.min_recency_weight,
            goal_weight: self.goal_weight,
            quiz_weight: self.quiz_weight,
            content_weight: self.content_weight,
            quiz_cooldown: Duration::hours(self.quiz_cooldown_hours),
            passing_score: self.passing_score,
            max_per_kind: self.max_suggestions_per_kind,
            diversification_return_threshold: self.diversification_return_threshold,
            investment_topics: self.investment_topics_list()?,
            risk_levels,
            cold_start_topics: self.cold_start_topics_list()?,
        })
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            recency_decay: default_recency_decay(),
            min_recency_weight: default_min_recency_weight(),
            goal_weight: default_weight(),
            quiz_weight: default_weight(),
            content_weight: default_weight(),
            quiz_cooldown_hours: default_quiz_cooldown_hours(),
            passing_score: default_passing_score(),
            max_suggestions_per_kind: default_max_suggestions_per_kind(),
            diversification_return_threshold: default_diversification_return_threshold(),
            investment_topics: default_investment_topics(),
            low_risk_topics: default_low_risk_topics(),
            high_risk_topics: default_high_risk_topics(),
            cold_start_topics: default_cold_start_topics(),
        }
    }
}

fn parse_topics(list: &'static str, raw: &str) -> Result<Vec<TopicTag>, ValidationError> {
    let parts = raw.split(',').map(str::trim).filter(|s| !s.is_empty());
    TopicTag::parse_all(parts).map_err(|_| ValidationError::InvalidTopic {
        list,
        value: raw.to_string(),
    })
}

fn default_recency_decay() -> f64 {
    0.8
}

fn default_min_recency_weight() -> f64 {
    0.05
}

fn default_weight() -> f64 {
    1.0
}

fn default_quiz_cooldown_hours() -> i64 {
    24
}

fn default_passing_score() -> f64 {
    70.0
}

fn default_max_suggestions_per_kind() -> usize {
    5
}

fn default_diversification_return_threshold() -> f64 {
    0.06
}

fn default_investment_topics() -> String {
    "fixed-deposit,recurring-deposit,bonds,gold,mutual-funds,stocks".to_string()
}

fn default_low_risk_topics() -> String {
    "fixed-deposit,bonds,recurring-deposit".to_string()
}

fn default_high_risk_topics() -> String {
    "stocks,crypto".to_string()
}

fn default_cold_start_topics() -> String {
    "budgeting,savings".to_string()
}
