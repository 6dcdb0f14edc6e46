//! HTTP adapter for investment endpoints.
//!
//! - `POST /api/clients/:client_id/investments` - Open an investment
//! - `GET /api/clients/:client_id/investments/summary` - Portfolio summary
//! - `PATCH /api/investments/:investment_id/status` - Status transition

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{client_investment_routes, investment_routes};
