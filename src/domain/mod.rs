//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `profile` - Client profile and risk classification
//! - `learning` - Catalog items, quiz attempts and learning history
//! - `investment` - Investment records, status machine and summaries
//! - `suggestion` - Pure suggestion engine

pub mod foundation;
pub mod investment;
pub mod learning;
pub mod profile;
pub mod suggestion;
