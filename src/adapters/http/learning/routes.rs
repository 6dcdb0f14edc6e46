//! Axum router configuration for learning endpoints.

use axum::{routing::post, Router};

use super::handlers::{get_progress, record_progress, submit_quiz};
use crate::adapters::http::state::AppState;

/// Create the learning API router, nested under `/api/clients`.
///
/// # Routes
/// - `POST /:client_id/progress` - Record progress
/// - `GET /:client_id/progress` - Read take-max progress
/// - `POST /:client_id/quizzes/:quiz_id/attempts` - Submit a quiz attempt
pub fn learning_routes() -> Router<AppState> {
    Router::new()
        .route("/:client_id/progress", post(record_progress).get(get_progress))
        .route("/:client_id/quizzes/:quiz_id/attempts", post(submit_quiz))
}
