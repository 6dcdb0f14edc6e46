//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Read Ports
//!
//! - `ProfileReader` - Client profiles (owned by onboarding)
//! - `LearningCatalog` - Content items and quizzes with topic tags
//!
//! ## Ledger Ports
//!
//! - `ActivityLedger` - Append-only quiz attempts and learning history
//! - `InvestmentLedger` - Investment records with compare-and-set status updates

mod activity_ledger;
mod investment_ledger;
mod learning_catalog;
mod profile_reader;

pub use activity_ledger::ActivityLedger;
pub use investment_ledger::{status_conflict, InvestmentLedger};
pub use learning_catalog::LearningCatalog;
pub use profile_reader::ProfileReader;
