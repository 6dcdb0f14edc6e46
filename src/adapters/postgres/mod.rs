//! PostgreSQL adapters - Database implementations for the ledger and reader ports.
//!
//! - `PostgresProfileReader` - Client profiles (read-only)
//! - `PostgresCatalog` - Content items and quizzes
//! - `PostgresActivityLedger` - Append-only quiz attempts and learning history
//! - `PostgresInvestmentLedger` - Investments with compare-and-set status updates

mod activity_ledger;
mod catalog;
mod investment_ledger;
mod profile_reader;

pub use activity_ledger::PostgresActivityLedger;
pub use catalog::PostgresCatalog;
pub use investment_ledger::PostgresInvestmentLedger;
pub use profile_reader::PostgresProfileReader;
