//! HTTP adapter for suggestion endpoints.
//!
//! - `GET /api/clients/:client_id/suggestions` - Ranked suggestions

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::suggestion_routes;
