//! Client profile module.
//!
//! The profile is owned by the account domain; the core only reads goals and
//! risk tolerance from it.

mod client_profile;
mod risk;

pub use client_profile::ClientProfile;
pub use risk::{RiskClassification, RiskLevel};
