//! Learning handlers.
//!
//! ## Commands
//! - Recording progress on learning content
//! - Submitting scored quiz attempts
//!
//! ## Queries
//! - Get the take-max progress view

mod get_progress;
mod record_progress;
mod submit_quiz;

// Commands
pub use record_progress::{RecordProgressCommand, RecordProgressHandler, RecordProgressResult};
pub use submit_quiz::{SubmitQuizCommand, SubmitQuizHandler, SubmitQuizResult};

// Queries
pub use get_progress::{GetProgressHandler, GetProgressQuery, GetProgressResult};
