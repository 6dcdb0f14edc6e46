//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Learning handlers
    GetProgressHandler, GetProgressQuery, GetProgressResult,
    RecordProgressCommand, RecordProgressHandler, RecordProgressResult,
    SubmitQuizCommand, SubmitQuizHandler, SubmitQuizResult,
    // Investment handlers
    CreateInvestmentCommand, CreateInvestmentHandler, CreateInvestmentResult,
    GetInvestmentSummaryHandler, GetInvestmentSummaryQuery, GetInvestmentSummaryResult,
    UpdateInvestmentStatusCommand, UpdateInvestmentStatusHandler, UpdateInvestmentStatusResult,
    // Suggestion handlers
    GetSuggestionsHandler, GetSuggestionsQuery, GetSuggestionsResult,
};
