//! HTTP adapters - REST API implementations.
//!
//! Each area has its own dto/handlers/routes module; all share [`AppState`].

pub mod error;
pub mod investment;
pub mod learning;
pub mod state;
pub mod suggestion;

pub use error::ErrorResponse;
pub use state::AppState;

use axum::{routing::get, Json, Router};
use serde_json::json;

/// Liveness check.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Full API router with state applied.
///
/// Tracing and timeout layers are added by the binary.
pub fn api_router(state: AppState) -> Router {
    let client_routes = learning::learning_routes()
        .merge(investment::client_investment_routes())
        .merge(suggestion::suggestion_routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api/clients", client_routes)
        .nest("/api/investments", investment::investment_routes())
        .with_state(state)
}
