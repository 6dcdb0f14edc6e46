//! Risk tolerance types used to fit investment suggestions to a client.

use serde::{Deserialize, Serialize};

/// Risk tolerance recorded on a client profile at onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskClassification {
    RiskSeeking,
    RiskNeutral,
    /// Low-risk investment types are ranked first
    RiskAverse,
}

impl RiskClassification {
    /// Multiplier applied to an investment type's affinity given its risk level.
    pub fn fit(&self, level: RiskLevel) -> f64 {
        match (self, level) {
            (Self::RiskAverse, RiskLevel::Low) => 1.0,
            (Self::RiskAverse, RiskLevel::Medium) => 0.75,
            (Self::RiskAverse, RiskLevel::High) => 0.5,
            (Self::RiskSeeking, RiskLevel::Low) => 0.75,
            (Self::RiskSeeking, _) => 1.0,
            (Self::RiskNeutral, _) => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RiskSeeking => "risk_seeking",
            Self::RiskNeutral => "risk_neutral",
            Self::RiskAverse => "risk_averse",
        }
    }
}

impl Default for RiskClassification {
    fn default() -> Self {
        Self::RiskNeutral
    }
}

impl std::fmt::Display for RiskClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RiskSeeking => write!(f, "Risk-Seeking"),
            Self::RiskNeutral => write!(f, "Risk-Neutral"),
            Self::RiskAverse => write!(f, "Risk-Averse"),
        }
    }
}

impl std::str::FromStr for RiskClassification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "risk_seeking" => Ok(Self::RiskSeeking),
            "risk_neutral" => Ok(Self::RiskNeutral),
            "risk_averse" => Ok(Self::RiskAverse),
            other => Err(format!("Unknown risk classification: {}", other)),
        }
    }
}

/// Risk level of an investment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}
