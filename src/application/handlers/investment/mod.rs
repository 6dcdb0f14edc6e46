//! Investment handlers.
//!
//! ## Commands
//! - Opening investments
//! - Status transitions guarded by compare-and-set
//!
//! ## Queries
//! - Portfolio summary

mod create_investment;
mod get_investment_summary;
mod update_investment_status;

// Commands
pub use create_investment::{
    CreateInvestmentCommand, CreateInvestmentHandler, CreateInvestmentResult,
};
pub use update_investment_status::{
    UpdateInvestmentStatusCommand, UpdateInvestmentStatusHandler, UpdateInvestmentStatusResult,
};

// Queries
pub use get_investment_summary::{
    GetInvestmentSummaryHandler, GetInvestmentSummaryQuery, GetInvestmentSummaryResult,
};
