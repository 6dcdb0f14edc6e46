//! In-memory adapters for every port.
//!
//! Used by tests and by development runs without `DATABASE__URL`.

mod activity_ledger;
mod catalog;
mod investment_ledger;
mod profile_store;

pub use activity_ledger::InMemoryActivityLedger;
pub use catalog::InMemoryCatalog;
pub use investment_ledger::InMemoryInvestmentLedger;
pub use profile_store::InMemoryProfileStore;
