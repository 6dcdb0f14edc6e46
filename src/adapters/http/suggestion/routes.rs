//! Axum router configuration for suggestion endpoints.

use axum::{routing::get, Router};

use super::handlers::get_suggestions;
use crate::adapters::http::state::AppState;

/// Suggestion routes, nested under `/api/clients`.
pub fn suggestion_routes() -> Router<AppState> {
    Router::new().route("/:client_id/suggestions", get(get_suggestions))
}
