//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod investment;
pub mod learning;
pub mod suggestion;

pub use investment::{
    CreateInvestmentCommand, CreateInvestmentHandler, CreateInvestmentResult,
    GetInvestmentSummaryHandler, GetInvestmentSummaryQuery, GetInvestmentSummaryResult,
    UpdateInvestmentStatusCommand, UpdateInvestmentStatusHandler, UpdateInvestmentStatusResult,
};
pub use learning::{
    GetProgressHandler, GetProgressQuery, GetProgressResult, RecordProgressCommand,
    RecordProgressHandler, RecordProgressResult, SubmitQuizCommand, SubmitQuizHandler,
    SubmitQuizResult,
};
pub use suggestion::{GetSuggestionsHandler, GetSuggestionsQuery, GetSuggestionsResult};
