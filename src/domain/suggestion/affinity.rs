//! Topic affinity - how strongly a client's signals point at each topic.

use std::collections::BTreeMap;

use crate::domain::foundation::TopicTag;
use crate::domain::learning::{authoritative_progress, ActivitySnapshot};
use crate::domain::profile::ClientProfile;

use super::SuggestionSettings;

/// Which signal a topic's affinity mostly came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffinitySource {
    Goals,
    QuizHistory,
    LearningHistory,
}

impl AffinitySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AffinitySource::Goals => "goals",
            AffinitySource::QuizHistory => "quiz-history",
            AffinitySource::LearningHistory => "learning-history",
        }
    }
}

/// Per-signal contributions to one topic's affinity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AffinityBreakdown {
    pub goals: f64,
    pub quizzes: f64,
    pub content: f64,
}

impl AffinityBreakdown {
    pub fn total(&self) -> f64 {
        self.goals + self.quizzes + self.content
    }

    /// Largest contributor. Ties resolve goals, then quizzes, then content.
    pub fn dominant_source(&self) -> AffinitySource {
        let mut best = (AffinitySource::Goals, self.goals);
        for candidate in [
            (AffinitySource::QuizHistory, self.quizzes),
            (AffinitySource::LearningHistory, self.content),
        ] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        best.0
    }
}

/// Affinity score per topic tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicAffinity {
    scores: BTreeMap<TopicTag, AffinityBreakdown>,
}

impl TopicAffinity {
    /// Folds goals, quiz history and learning history into per-topic scores.
    ///
    /// # Algorithm
    /// - each goal adds `goal_weight`
    /// - quiz attempts, newest first (ties by quiz id), add
    ///   `quiz_weight × score/100 × recency_weight(i)` to every tag
    /// - each content item's take-max completion adds
    ///   `content_weight × completion/100` to every tag
    ///
    /// # Edge Cases
    /// - No goals and an empty snapshot: no topics
    /// - Repeated progress on one content item counts once, at its maximum
    pub fn compute(
        profile: &ClientProfile,
        activity: &ActivitySnapshot,
        settings: &SuggestionSettings,
    ) -> Self {
        let mut scores: BTreeMap<TopicTag, AffinityBreakdown> = BTreeMap::new();

        for goal in &profile.goals {
            scores.entry(goal.clone()).or_default().goals += settings.goal_weight;
        }

        let mut attempts: Vec<_> = activity.quiz_attempts.iter().collect();
        attempts.sort_by(|a, b| {
            b.completed_at
                .cmp(&a.completed_at)
                .then_with(|| a.quiz_id.cmp(&b.quiz_id))
        });
        for (step, attempt) in attempts.iter().enumerate() {
            let weight =
                settings.quiz_weight * attempt.score.as_fraction() * settings.recency_weight(step);
            for tag in &attempt.tags {
                scores.entry(tag.clone()).or_default().quizzes += weight;
            }
        }

        for progress in authoritative_progress(&activity.learning_history).values() {
            let weight = settings.content_weight * progress.completion.as_fraction();
            for tag in &progress.tags {
                scores.entry(tag.clone()).or_default().content += weight;
            }
        }

        Self { scores }
    }

    /// Total affinity for a topic; 0.0 when the client has no signal for it.
    pub fn get(&self, topic: &TopicTag) -> f64 {
        self.scores.get(topic).map(|b| b.total()).unwrap_or(0.0)
    }

    pub fn breakdown(&self, topic: &TopicTag) -> Option<&AffinityBreakdown> {
        self.scores.get(topic)
    }

    /// Topics with strictly positive affinity, in tag order.
    pub fn positive(&self) -> impl Iterator<Item = (&TopicTag, f64)> {
        self.scores
            .iter()
            .map(|(tag, b)| (tag, b.total()))
            .filter(|(_, score)| *score > 0.0)
    }

    /// The highest-affinity tag among `tags`; ties go to the smaller tag.
    pub fn best_of<'a>(&self, tags: &'a [TopicTag]) -> Option<(&'a TopicTag, f64)> {
        let mut best: Option<(&TopicTag, f64)> = None;
        for tag in tags {
            let score = self.get(tag);
            best = match best {
                Some((current, current_score))
                    if current_score > score || (current_score == score && current <= tag) =>
                {
                    Some((current, current_score))
                }
                _ => Some((tag, score)),
            };
        }
        best
    }

    pub fn source_of(&self, topic: &TopicTag) -> AffinitySource {
        self.breakdown(topic)
            .map(|b| b.dominant_source())
            .unwrap_or(AffinitySource::Goals)
    }

    pub fn is_empty(&self) -> bool {
        self.positive().next().is_none()
    }
}
