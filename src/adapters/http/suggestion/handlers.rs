//! HTTP handlers for suggestion endpoints.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::application::handlers::GetSuggestionsQuery;
use crate::domain::foundation::ClientId;

use super::dto::{SuggestionResponse, SuggestionsResponse};
use crate::adapters::http::error::SuggestionApiError;
use crate::adapters::http::state::AppState;

/// GET /api/clients/:client_id/suggestions - Ranked quiz, content and investment suggestions
pub async fn get_suggestions(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, SuggestionApiError> {
    let query = GetSuggestionsQuery {
        client_id: ClientId::new(client_id)?,
    };
    let client_id = query.client_id.to_string();

    let result = state.suggestions_handler().handle(query).await?;

    Ok(Json(SuggestionsResponse {
        client_id,
        generated_at: *result.generated_at.as_datetime(),
        suggestions: result
            .suggestions
            .into_iter()
            .map(SuggestionResponse::from)
            .collect(),
    }))
}
