//! Suggestion domain module.
//!
//! Ranks quizzes, learning content and investment ideas from a client's
//! goals, activity and portfolio.
//!
//! # Module Structure
//!
//! - `suggestion` - Suggestion value and kind
//! - `settings` - Engine tunables
//! - `affinity` - Per-topic affinity from goals and activity
//! - `confidence` - Min-max confidence normalization
//! - `engine` - SuggestionEngine
//! - `errors` - SuggestionError

mod affinity;
mod confidence;
mod engine;
mod errors;
mod settings;
mod suggestion;

pub use affinity::{AffinityBreakdown, AffinitySource, TopicAffinity};
pub use confidence::normalize;
pub use engine::{InvestmentStrategy, SuggestionEngine, SuggestionInput, COLD_START_SOURCE};
pub use errors::SuggestionError;
pub use settings::SuggestionSettings;
pub use suggestion::{Suggestion, SuggestionKind};
