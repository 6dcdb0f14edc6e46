//! HTTP handlers for learning endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    GetProgressQuery, RecordProgressCommand, SubmitQuizCommand,
};
use crate::domain::foundation::{ClientId, ContentId, QuizId, Timestamp};

use super::dto::{
    ContentProgressResponse, ProgressRecordedResponse, ProgressResponse, QuizAttemptResponse,
    RecordProgressRequest, SubmitQuizRequest,
};
use crate::adapters::http::error::LearningApiError;
use crate::adapters::http::state::AppState;

/// POST /api/clients/:client_id/progress - Record progress on a content item
pub async fn record_progress(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(request): Json<RecordProgressRequest>,
) -> Result<impl IntoResponse, LearningApiError> {
    let cmd = RecordProgressCommand {
        client_id: ClientId::new(client_id)?,
        content_id: ContentId::new(request.content_id)?,
        completion: request.completion,
        extra: request.extra,
    };

    let result = state.record_progress_handler().handle(cmd).await?;

    let response = ProgressRecordedResponse {
        content_id: result.entry.content_id.to_string(),
        completion: result.entry.completion.value(),
        authoritative_completion: result.authoritative_completion.value(),
        tags: result.entry.tags.iter().map(|t| t.to_string()).collect(),
        viewed_at: *result.entry.viewed_at.as_datetime(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/clients/:client_id/progress - Take-max progress per content item
pub async fn get_progress(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, LearningApiError> {
    let query = GetProgressQuery {
        client_id: ClientId::new(client_id)?,
    };
    let client_id = query.client_id.to_string();

    let result = state.get_progress_handler().handle(query).await?;

    Ok(Json(ProgressResponse {
        client_id,
        items: result
            .items
            .into_iter()
            .map(ContentProgressResponse::from)
            .collect(),
    }))
}

/// POST /api/clients/:client_id/quizzes/:quiz_id/attempts - Submit a scored attempt
pub async fn submit_quiz(
    State(state): State<AppState>,
    Path((client_id, quiz_id)): Path<(String, String)>,
    Json(request): Json<SubmitQuizRequest>,
) -> Result<impl IntoResponse, LearningApiError> {
    let cmd = SubmitQuizCommand {
        client_id: ClientId::new(client_id)?,
        quiz_id: QuizId::new(quiz_id)?,
        score: request.score,
        answers: request.answers,
        completed_at: request.completed_at.map(Timestamp::from_datetime),
    };

    let result = state.submit_quiz_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(QuizAttemptResponse::new(&result.attempt, result.passed)),
    ))
}
