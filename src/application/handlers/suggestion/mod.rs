//! Suggestion handlers.
//!
//! ## Queries
//! - Ranked quiz, content and investment suggestions

mod get_suggestions;

pub use get_suggestions::{GetSuggestionsHandler, GetSuggestionsQuery, GetSuggestionsResult};
