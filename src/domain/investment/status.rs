//! Investment status state machine.
//!
//! `Active` is the initial state; `Matured` and `Withdrawn` are terminal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Lifecycle status of an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStatus {
    /// Funds are invested.
    Active,
    /// The investment reached its term.
    Matured,
    /// The client pulled the funds out early.
    Withdrawn,
}

impl InvestmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentStatus::Active => "active",
            InvestmentStatus::Matured => "matured",
            InvestmentStatus::Withdrawn => "withdrawn",
        }
    }
}

impl StateMachine for InvestmentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use InvestmentStatus::*;
        matches!((self, target), (Active, Matured) | (Active, Withdrawn))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use InvestmentStatus::*;
        match self {
            Active => vec![Matured, Withdrawn],
            Matured => vec![],
            Withdrawn => vec![],
        }
    }
}

impl fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvestmentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(InvestmentStatus::Active),
            "matured" => Ok(InvestmentStatus::Matured),
            "withdrawn" => Ok(InvestmentStatus::Withdrawn),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}
