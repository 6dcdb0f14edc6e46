//! Investment domain module.
//!
//! # Module Structure
//!
//! - `record` - InvestmentRecord aggregate and its audit trail
//! - `status` - InvestmentStatus state machine
//! - `summary` - InvestmentSummary fold
//! - `errors` - InvestmentError

mod errors;
mod record;
mod status;
mod summary;

pub use errors::InvestmentError;
pub use record::{InvestmentRecord, StatusChange};
pub use status::InvestmentStatus;
pub use summary::{active_types, InvestmentSummary};
