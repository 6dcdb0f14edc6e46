//! Suggestion Engine - ranks quizzes, content and investment ideas for a client.
//!
//! Pure and synchronous. The application layer gathers a consistent snapshot
//! of the client's profile, activity, investments and the catalog, and the
//! engine turns it into an ordered list.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::domain::foundation::{Metadata, MetadataValue, Timestamp, TopicTag};
use crate::domain::investment::{active_types, InvestmentRecord, InvestmentSummary};
use crate::domain::learning::{
    authoritative_progress, ActivitySnapshot, ContentItem, QuizAttempt, QuizItem,
};
use crate::domain::profile::{ClientProfile, RiskLevel};

use super::affinity::TopicAffinity;
use super::confidence::normalize;
use super::{Suggestion, SuggestionKind, SuggestionSettings};

/// Metadata `source` value for defaults emitted without client signal.
pub const COLD_START_SOURCE: &str = "cold-start";

/// Everything the engine reads for one client.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInput<'a> {
    pub profile: &'a ClientProfile,
    pub activity: &'a ActivitySnapshot,
    pub investments: &'a [InvestmentRecord],
    pub quizzes: &'a [QuizItem],
    pub content: &'a [ContentItem],
}

/// How an investment suggestion was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentStrategy {
    /// Client has no investments yet.
    Beginner,
    /// Client's active portfolio returns less than the threshold.
    Diversify,
}

impl InvestmentStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentStrategy::Beginner => "beginner",
            InvestmentStrategy::Diversify => "diversify",
        }
    }
}

/// An unranked candidate of one kind.
#[derive(Debug, Clone)]
struct Candidate {
    payload: String,
    affinity: f64,
    metadata: Metadata,
}

impl Candidate {
    fn new(payload: impl Into<String>, affinity: f64) -> Self {
        Self {
            payload: payload.into(),
            affinity,
            metadata: Metadata::new(),
        }
    }

    fn with(mut self, key: &str, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// Suggestion engine configured with a set of tunables.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    settings: SuggestionSettings,
}

impl SuggestionEngine {
    pub fn new(settings: SuggestionSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SuggestionSettings {
        &self.settings
    }

    /// Produces the ordered suggestion list for one client.
    ///
    /// # Algorithm
    /// 1. Fold goals, quiz attempts and take-max learning progress into topic affinity
    /// 2. Build quiz, content and investment candidates from affinity
    /// 3. Per kind: min-max normalize, sort by confidence then payload, dedup, truncate
    /// 4. Concatenate quiz, content, investment
    ///
    /// # Edge Cases
    /// - A kind with no candidate carrying signal emits cold-start defaults at 0.0
    /// - Topics in quiz cooldown are never suggested, not even as defaults
    /// - Mastered content (completion 100) is never suggested
    pub fn suggest(&self, input: &SuggestionInput<'_>, now: Timestamp) -> Vec<Suggestion> {
        let affinity = TopicAffinity::compute(input.profile, input.activity, &self.settings);

        let mut suggestions = Vec::new();
        for (kind, candidates) in [
            (SuggestionKind::Quiz, self.quiz_candidates(input, &affinity, now)),
            (SuggestionKind::Content, self.content_candidates(input, &affinity)),
            (
                SuggestionKind::Investment,
                self.investment_candidates(input, &affinity),
            ),
        ] {
            suggestions.extend(self.rank(input.profile, kind, candidates));
        }
        suggestions
    }

    // ═══════════════════════════════════════════════════════════════
    // Quiz suggestions
    // ═══════════════════════════════════════════════════════════════

    fn quiz_candidates(
        &self,
        input: &SuggestionInput<'_>,
        affinity: &TopicAffinity,
        now: Timestamp,
    ) -> Vec<Candidate> {
        let attempts = &input.activity.quiz_attempts;
        let candidates: Vec<Candidate> = affinity
            .positive()
            .filter(|(topic, _)| !self.in_cooldown(topic, attempts, now))
            .map(|(topic, score)| {
                self.quiz_candidate(topic, score, input)
                    .with("source", affinity.source_of(topic).as_str())
            })
            .collect();
        if !candidates.is_empty() {
            return candidates;
        }

        self.settings
            .cold_start_topics
            .iter()
            .filter(|topic| !self.in_cooldown(topic, attempts, now))
            .map(|topic| self.quiz_candidate(topic, 0.0, input).with("source", COLD_START_SOURCE))
            .collect()
    }

    fn quiz_candidate(&self, topic: &TopicTag, score: f64, input: &SuggestionInput<'_>) -> Candidate {
        let candidate = Candidate::new(topic.as_str(), score).with("topic", topic.as_str());
        match self.quiz_for(topic, input) {
            Some(quiz) => candidate.with("quiz_id", quiz.id.as_str()),
            None => candidate,
        }
    }

    /// Catalog quiz for a topic: the lowest id the client has not passed, else the lowest id.
    fn quiz_for<'a>(&self, topic: &TopicTag, input: &SuggestionInput<'a>) -> Option<&'a QuizItem> {
        let mut covering: Vec<&QuizItem> = input.quizzes.iter().filter(|q| q.covers(topic)).collect();
        covering.sort_by(|a, b| a.id.cmp(&b.id));
        let passed = |quiz: &QuizItem| {
            input
                .activity
                .quiz_attempts
                .iter()
                .any(|a| a.quiz_id == quiz.id && a.is_passing(self.settings.passing_score))
        };
        covering
            .iter()
            .copied()
            .find(|quiz| !passed(quiz))
            .or_else(|| covering.first().copied())
    }

    /// A topic cools down after a recent failed attempt that no recent pass offsets.
    fn in_cooldown(&self, topic: &TopicTag, attempts: &[QuizAttempt], now: Timestamp) -> bool {
        let window_start = now
            .as_datetime()
            .checked_sub_signed(self.settings.quiz_cooldown)
            .map(Timestamp::from_datetime)
            .unwrap_or_else(|| Timestamp::from_datetime(DateTime::<Utc>::MIN_UTC));
        let mut failed = false;
        for attempt in attempts
            .iter()
            .filter(|a| a.covers(topic) && !a.completed_at.is_before(&window_start))
        {
            if attempt.is_passing(self.settings.passing_score) {
                return false;
            }
            failed = true;
        }
        failed
    }

    // ═══════════════════════════════════════════════════════════════
    // Content suggestions
    // ═══════════════════════════════════════════════════════════════

    fn content_candidates(
        &self,
        input: &SuggestionInput<'_>,
        affinity: &TopicAffinity,
    ) -> Vec<Candidate> {
        let progress = authoritative_progress(&input.activity.learning_history);
        let unmastered = input.content.iter().filter(|item| {
            progress
                .get(&item.id)
                .map(|p| !p.is_mastered())
                .unwrap_or(true)
        });

        let mut candidates = Vec::new();
        let mut cold = Vec::new();
        for item in unmastered {
            let Some((topic, score)) = affinity.best_of(&item.tags) else {
                continue;
            };
            if score > 0.0 {
                candidates.push(
                    Self::content_candidate(item, topic, score)
                        .with("source", affinity.source_of(topic).as_str()),
                );
            } else if let Some(topic) = item
                .tags
                .iter()
                .filter(|t| self.settings.cold_start_topics.contains(t))
                .min()
            {
                cold.push(Self::content_candidate(item, topic, 0.0).with("source", COLD_START_SOURCE));
            }
        }

        if candidates.is_empty() {
            cold
        } else {
            candidates
        }
    }

    fn content_candidate(item: &ContentItem, topic: &TopicTag, score: f64) -> Candidate {
        Candidate::new(item.id.as_str(), score)
            .with("topic", topic.as_str())
            .with("title", item.title.as_str())
    }

    // ═══════════════════════════════════════════════════════════════
    // Investment suggestions
    // ═══════════════════════════════════════════════════════════════

    fn investment_candidates(
        &self,
        input: &SuggestionInput<'_>,
        affinity: &TopicAffinity,
    ) -> Vec<Candidate> {
        let summary = InvestmentSummary::from_records(input.investments);
        let held = active_types(input.investments);

        let strategy = if !summary.has_investments() {
            InvestmentStrategy::Beginner
        } else if summary.active > 0
            && summary.average_return_rate < self.settings.diversification_return_threshold
        {
            InvestmentStrategy::Diversify
        } else {
            return Vec::new();
        };

        let risk = input.profile.risk_tolerance.unwrap_or_default();
        let open_topics: Vec<&TopicTag> = self
            .settings
            .investment_topics
            .iter()
            .filter(|topic| !held.contains(*topic))
            .collect();

        let candidates: Vec<Candidate> = open_topics
            .iter()
            .filter_map(|topic| {
                let base = affinity.get(topic);
                if base <= 0.0 {
                    return None;
                }
                let score = base * risk.fit(self.settings.risk_level(topic));
                Some(
                    self.investment_candidate(topic, score, strategy)
                        .with("source", affinity.source_of(topic).as_str()),
                )
            })
            .collect();
        if !candidates.is_empty() {
            return candidates;
        }

        // Defaults are the low-risk types the client does not already hold.
        let low_risk: Vec<&TopicTag> = open_topics
            .iter()
            .copied()
            .filter(|topic| self.settings.risk_level(topic) == RiskLevel::Low)
            .collect();
        let defaults = if low_risk.is_empty() {
            open_topics.into_iter().take(1).collect()
        } else {
            low_risk
        };
        defaults
            .into_iter()
            .map(|topic| {
                self.investment_candidate(topic, 0.0, strategy)
                    .with("source", COLD_START_SOURCE)
            })
            .collect()
    }

    fn investment_candidate(
        &self,
        topic: &TopicTag,
        score: f64,
        strategy: InvestmentStrategy,
    ) -> Candidate {
        Candidate::new(topic.as_str(), score)
            .with("topic", topic.as_str())
            .with("investment_type", topic.as_str())
            .with("strategy", strategy.as_str())
            .with("risk_level", self.settings.risk_level(topic).as_str())
    }

    // ═══════════════════════════════════════════════════════════════
    // Ranking
    // ═══════════════════════════════════════════════════════════════

    fn rank(
        &self,
        profile: &ClientProfile,
        kind: SuggestionKind,
        candidates: Vec<Candidate>,
    ) -> Vec<Suggestion> {
        let affinities: Vec<f64> = candidates.iter().map(|c| c.affinity).collect();
        let mut ranked: Vec<Suggestion> = candidates
            .into_iter()
            .zip(normalize(&affinities))
            .map(|(candidate, confidence)| {
                Suggestion::new(
                    profile.id.clone(),
                    kind,
                    candidate.payload,
                    confidence,
                    candidate.metadata,
                )
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| a.payload.cmp(&b.payload))
        });

        let mut seen = BTreeSet::new();
        ranked.retain(|s| seen.insert(s.payload.clone()));
        ranked.truncate(self.settings.max_per_kind);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{
        ClientId, ContentId, InvestmentId, Money, Percentage, QuizId,
    };
    use crate::domain::investment::InvestmentStatus;
    use crate::domain::learning::LearningHistoryEntry;
    use crate::domain::profile::RiskClassification;

    fn tag(s: &str) -> TopicTag {
        TopicTag::new(s).unwrap()
    }

    fn tags(raw: &[&str]) -> Vec<TopicTag> {
        raw.iter().map(|t| tag(t)).collect()
    }

    fn profile(goals: &[&str]) -> ClientProfile {
        ClientProfile::new(ClientId::new("client-1").unwrap(), "Asha", tags(goals))
    }

    fn quiz(id: &str, topics: &[&str]) -> QuizItem {
        QuizItem::new(QuizId::new(id).unwrap(), id, tags(topics))
    }

    fn content(id: &str, topics: &[&str]) -> ContentItem {
        ContentItem::new(ContentId::new(id).unwrap(), format!("Title {}", id), tags(topics))
    }

    fn attempt(item: &QuizItem, score: f64, at: Timestamp) -> QuizAttempt {
        QuizAttempt::record(item, score, Vec::new(), at).unwrap()
    }

    fn viewed(item: &ContentItem, completion: f64) -> LearningHistoryEntry {
        LearningHistoryEntry::new(
            item,
            Percentage::try_new("completion", completion).unwrap(),
            Timestamp::now(),
            Metadata::new(),
        )
    }

    fn investment(kind: &str, amount: f64, returns: Option<f64>) -> InvestmentRecord {
        InvestmentRecord::open(
            InvestmentId::new(),
            ClientId::new("client-1").unwrap(),
            tag(kind),
            Money::positive_from_major("amount", amount).unwrap(),
            Timestamp::now(),
            "advisor",
            returns.map(|r| Money::from_major("returns", r).unwrap()),
        )
    }

    fn of_kind(suggestions: &[Suggestion], kind: SuggestionKind) -> Vec<&Suggestion> {
        suggestions.iter().filter(|s| s.kind == kind).collect()
    }

    struct Fixture {
        profile: ClientProfile,
        activity: ActivitySnapshot,
        investments: Vec<InvestmentRecord>,
        quizzes: Vec<QuizItem>,
        content: Vec<ContentItem>,
    }

    impl Fixture {
        fn new(goals: &[&str]) -> Self {
            Self {
                profile: profile(goals),
                activity: ActivitySnapshot::default(),
                investments: Vec::new(),
                quizzes: vec![quiz("q-savings", &["savings"]), quiz("q-budget", &["budgeting"])],
                content: vec![
                    content("c-budget", &["budgeting"]),
                    content("c-gold", &["gold", "savings"]),
                ],
            }
        }

        fn suggest(&self) -> Vec<Suggestion> {
            self.suggest_at(Timestamp::now())
        }

        fn suggest_at(&self, now: Timestamp) -> Vec<Suggestion> {
            let input = SuggestionInput {
                profile: &self.profile,
                activity: &self.activity,
                investments: &self.investments,
                quizzes: &self.quizzes,
                content: &self.content,
            };
            SuggestionEngine::default().suggest(&input, now)
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Quiz suggestion tests
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn goal_with_strong_attempt_is_top_quiz_suggestion() {
        let mut fixture = Fixture::new(&["savings"]);
        let q = fixture.quizzes[0].clone();
        fixture.activity.quiz_attempts.push(attempt(&q, 90.0, Timestamp::now()));

        let suggestions = fixture.suggest();
        let quizzes = of_kind(&suggestions, SuggestionKind::Quiz);

        assert_eq!(quizzes[0].payload, "savings");
        assert_eq!(quizzes[0].confidence, 1.0);
        assert_eq!(quizzes[0].topic(), Some("savings"));
        assert_eq!(
            quizzes[0].metadata.get("quiz_id").and_then(MetadataValue::as_text),
            Some("q-savings")
        );
    }

    #[test]
    fn failed_recent_attempt_puts_topic_in_cooldown() {
        let mut fixture = Fixture::new(&["savings", "gold"]);
        let q = fixture.quizzes[0].clone();
        let now = Timestamp::now();
        fixture.activity.quiz_attempts.push(attempt(&q, 30.0, now.minus_hours(2)));

        let suggestions = fixture.suggest_at(now);
        let payloads: Vec<_> = of_kind(&suggestions, SuggestionKind::Quiz)
            .iter()
            .map(|s| s.payload.as_str())
            .collect();
        assert_eq!(payloads, vec!["gold"]);
    }

    #[test]
    fn cooldown_expires_after_window() {
        let mut fixture = Fixture::new(&["savings"]);
        let q = fixture.quizzes[0].clone();
        let now = Timestamp::now();
        fixture.activity.quiz_attempts.push(attempt(&q, 30.0, now.minus_hours(30)));

        let suggestions = fixture.suggest_at(now);
        assert_eq!(of_kind(&suggestions, SuggestionKind::Quiz)[0].payload, "savings");
    }

    #[test]
    fn cooldown_longer_than_the_calendar_does_not_overflow() {
        let mut fixture = Fixture::new(&["savings", "gold"]);
        let q = fixture.quizzes[0].clone();
        let now = Timestamp::now();
        fixture.activity.quiz_attempts.push(attempt(&q, 30.0, now.minus_days(400)));
        let engine = SuggestionEngine::new(SuggestionSettings {
            quiz_cooldown: chrono::Duration::days(365 * 1_000_000),
            ..SuggestionSettings::default()
        });
        let input = SuggestionInput {
            profile: &fixture.profile,
            activity: &fixture.activity,
            investments: &fixture.investments,
            quizzes: &fixture.quizzes,
            content: &fixture.content,
        };

        let suggestions = engine.suggest(&input, now);
        let payloads: Vec<_> = of_kind(&suggestions, SuggestionKind::Quiz)
            .iter()
            .map(|s| s.payload.as_str())
            .collect();
        assert_eq!(payloads, vec!["gold"]);
    }

    #[test]
    fn recent_pass_offsets_recent_failure() {
        let mut fixture = Fixture::new(&["savings"]);
        let q = fixture.quizzes[0].clone();
        let now = Timestamp::now();
        fixture.activity.quiz_attempts.push(attempt(&q, 30.0, now.minus_hours(3)));
        fixture.activity.quiz_attempts.push(attempt(&q, 85.0, now.minus_hours(1)));

        let suggestions = fixture.suggest_at(now);
        assert_eq!(of_kind(&suggestions, SuggestionKind::Quiz)[0].payload, "savings");
    }

    // ═══════════════════════════════════════════════════════════════
    // Content suggestion tests
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn mastered_content_is_excluded() {
        let mut fixture = Fixture::new(&["budgeting"]);
        let item = fixture.content[0].clone();
        fixture.activity.learning_history.push(viewed(&item, 100.0));

        let suggestions = fixture.suggest();
        assert!(of_kind(&suggestions, SuggestionKind::Content)
            .iter()
            .all(|s| s.payload != "c-budget"));
    }

    #[test]
    fn content_metadata_names_topic_and_title() {
        let fixture = Fixture::new(&["gold"]);
        let suggestions = fixture.suggest();
        let content = of_kind(&suggestions, SuggestionKind::Content);

        assert_eq!(content.len(), 1);
        assert_eq!(content[0].payload, "c-gold");
        assert_eq!(content[0].topic(), Some("gold"));
        assert_eq!(content[0].source(), Some("goals"));
        assert_eq!(
            content[0].metadata.get("title").and_then(MetadataValue::as_text),
            Some("Title c-gold")
        );
    }

    // ═══════════════════════════════════════════════════════════════
    // Investment suggestion tests
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn beginner_suggestions_follow_investment_affinity() {
        let fixture = Fixture::new(&["gold", "stocks"]);
        let suggestions = fixture.suggest();
        let investments = of_kind(&suggestions, SuggestionKind::Investment);

        let payloads: Vec<_> = investments.iter().map(|s| s.payload.as_str()).collect();
        assert_eq!(payloads, vec!["gold", "stocks"]);
        assert!(investments.iter().all(|s| s.confidence == 1.0));
        assert!(investments.iter().all(|s| {
            s.metadata.get("strategy").and_then(MetadataValue::as_text) == Some("beginner")
        }));
    }

    #[test]
    fn risk_averse_client_prefers_low_risk_types() {
        let mut fixture = Fixture::new(&["bonds", "stocks"]);
        fixture.profile = fixture
            .profile
            .clone()
            .with_risk_tolerance(RiskClassification::RiskAverse);

        let suggestions = fixture.suggest();
        let investments = of_kind(&suggestions, SuggestionKind::Investment);

        assert_eq!(investments[0].payload, "bonds");
        assert_eq!(investments[0].confidence, 1.0);
        assert_eq!(investments[1].payload, "stocks");
        assert_eq!(investments[1].confidence, 0.0);
    }

    #[test]
    fn low_returns_suggest_diversifying_into_unheld_types() {
        let mut fixture = Fixture::new(&["gold", "bonds"]);
        fixture.investments.push(investment("gold", 1000.0, Some(10.0)));

        let suggestions = fixture.suggest();
        let investments = of_kind(&suggestions, SuggestionKind::Investment);

        assert_eq!(investments.len(), 1);
        assert_eq!(investments[0].payload, "bonds");
        assert_eq!(
            investments[0].metadata.get("strategy").and_then(MetadataValue::as_text),
            Some("diversify")
        );
    }

    #[test]
    fn healthy_portfolio_gets_no_investment_suggestions() {
        let mut fixture = Fixture::new(&["gold", "bonds"]);
        fixture.investments.push(investment("gold", 1000.0, Some(120.0)));

        let suggestions = fixture.suggest();
        assert!(of_kind(&suggestions, SuggestionKind::Investment).is_empty());
    }

    #[test]
    fn closed_portfolio_gets_no_diversification() {
        let mut fixture = Fixture::new(&["bonds"]);
        let mut record = investment("gold", 1000.0, None);
        record
            .transition(InvestmentStatus::Withdrawn, None, None, Timestamp::now())
            .unwrap();
        fixture.investments.push(record);

        let suggestions = fixture.suggest();
        assert!(of_kind(&suggestions, SuggestionKind::Investment).is_empty());
    }

    // ═══════════════════════════════════════════════════════════════
    // Cold start and ordering tests
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn no_signal_yields_only_cold_start_defaults() {
        let fixture = Fixture::new(&[]);
        let suggestions = fixture.suggest();

        assert!(!suggestions.is_empty());
        for s in &suggestions {
            assert_eq!(s.confidence, 0.0);
            assert_eq!(s.source(), Some(COLD_START_SOURCE));
        }
        let quizzes: Vec<_> = of_kind(&suggestions, SuggestionKind::Quiz)
            .iter()
            .map(|s| s.payload.as_str())
            .collect();
        assert_eq!(quizzes, vec!["budgeting", "savings"]);
        let investments: Vec<_> = of_kind(&suggestions, SuggestionKind::Investment)
            .iter()
            .map(|s| s.payload.as_str())
            .collect();
        assert_eq!(investments, vec!["bonds", "fixed-deposit", "recurring-deposit"]);
    }

    #[test]
    fn kinds_come_out_in_fixed_order() {
        let fixture = Fixture::new(&["savings", "gold"]);
        let suggestions = fixture.suggest();
        let kinds: Vec<_> = suggestions.iter().map(|s| s.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
    }

    #[test]
    fn each_kind_is_capped() {
        let mut fixture = Fixture::new(&["a", "b", "c", "d", "e", "f", "g"]);
        fixture.quizzes.clear();
        let suggestions = fixture.suggest();
        assert_eq!(of_kind(&suggestions, SuggestionKind::Quiz).len(), 5);
    }

    #[test]
    fn no_duplicate_kind_payload_pairs() {
        let mut fixture = Fixture::new(&["savings", "gold", "budgeting"]);
        fixture.content.push(content("c-gold", &["gold"]));
        let suggestions = fixture.suggest();

        let mut seen = BTreeSet::new();
        for s in &suggestions {
            assert!(seen.insert((s.kind, s.payload.clone())));
            assert!((0.0..=1.0).contains(&s.confidence));
        }
    }
}
