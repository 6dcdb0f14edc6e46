//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory stores for development and tests
//! - `postgres` - PostgreSQL-backed stores
//! - `http` - axum REST API

pub mod http;
pub mod memory;
pub mod postgres;
