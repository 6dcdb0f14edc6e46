//! Client profile as seen by the core (read-only).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientId, Timestamp, TopicTag};

use super::RiskClassification;

/// Durable record of a client's identity, demographics and goals.
///
/// Owned by the account domain. The core never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: ClientId,
    pub name: String,
    pub phone: String,
    pub language: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    /// Annual income in major units, as captured at signup.
    pub income: Option<f64>,
    /// Ordered, de-duplicated goal topics.
    pub goals: Vec<TopicTag>,
    pub risk_tolerance: Option<RiskClassification>,
    pub created_at: Timestamp,
}

impl ClientProfile {
    /// Creates a minimal profile with the given goals.
    pub fn new(id: ClientId, name: impl Into<String>, goals: Vec<TopicTag>) -> Self {
        let mut unique: Vec<TopicTag> = Vec::with_capacity(goals.len());
        for goal in goals {
            if !unique.contains(&goal) {
                unique.push(goal);
            }
        }
        Self {
            id,
            name: name.into(),
            phone: String::new(),
            language: "en".to_string(),
            age: None,
            gender: None,
            income: None,
            goals: unique,
            risk_tolerance: None,
            created_at: Timestamp::now(),
        }
    }

    pub fn with_risk_tolerance(mut self, risk: RiskClassification) -> Self {
        self.risk_tolerance = Some(risk);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> TopicTag {
        TopicTag::new(s).unwrap()
    }

    #[test]
    fn new_deduplicates_goals_keeping_order() {
        let profile = ClientProfile::new(
            ClientId::new("c-1").unwrap(),
            "Asha",
            vec![tag("savings"), tag("budgeting"), tag("savings")],
        );
        assert_eq!(profile.goals, vec![tag("savings"), tag("budgeting")]);
    }

    #[test]
    fn risk_tolerance_is_optional() {
        let profile = ClientProfile::new(ClientId::new("c-1").unwrap(), "Asha", vec![]);
        assert_eq!(profile.risk_tolerance, None);
        assert_eq!(profile.language, "en");

        let profile = profile.with_risk_tolerance(RiskClassification::RiskAverse);
        assert_eq!(profile.risk_tolerance, Some(RiskClassification::RiskAverse));
    }
}
