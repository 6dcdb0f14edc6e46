//! Axum router configuration for investment endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{create_investment, get_investment_summary, update_investment_status};
use crate::adapters::http::state::AppState;

/// Client-scoped investment routes, nested under `/api/clients`.
///
/// # Routes
/// - `POST /:client_id/investments` - Open an investment
/// - `GET /:client_id/investments/summary` - Portfolio summary
pub fn client_investment_routes() -> Router<AppState> {
    Router::new()
        .route("/:client_id/investments", post(create_investment))
        .route("/:client_id/investments/summary", get(get_investment_summary))
}

/// Investment-scoped routes, nested under `/api/investments`.
///
/// # Routes
/// - `PATCH /:investment_id/status` - Status transition with expected status
pub fn investment_routes() -> Router<AppState> {
    Router::new().route("/:investment_id/status", patch(update_investment_status))
}
