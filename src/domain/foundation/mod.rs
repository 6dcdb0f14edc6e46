//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the wealth-coach domain.

mod errors;
mod ids;
mod metadata;
mod money;
mod percentage;
mod state_machine;
mod timestamp;
mod topic;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClientId, ContentId, InvestmentId, QuizId};
pub use metadata::{Metadata, MetadataValue};
pub use money::Money;
pub use percentage::Percentage;
pub use state_machine::{StateMachine, TransitionError};
pub use timestamp::Timestamp;
pub use topic::TopicTag;
