//! HTTP router integration tests.
//!
//! Requests go through the full axum router backed by in-memory stores.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use wealth_coach::adapters::http::{api_router, AppState};
use wealth_coach::adapters::memory::{
    InMemoryActivityLedger, InMemoryCatalog, InMemoryInvestmentLedger, InMemoryProfileStore,
};
use wealth_coach::domain::foundation::{ClientId, ContentId, QuizId, TopicTag};
use wealth_coach::domain::learning::{ContentItem, QuizItem};
use wealth_coach::domain::profile::ClientProfile;
use wealth_coach::domain::suggestion::SuggestionEngine;

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn app() -> Router {
    let profiles = Arc::new(InMemoryProfileStore::new());
    profiles
        .upsert(ClientProfile::new(
            ClientId::new("asha").unwrap(),
            "Asha",
            vec![TopicTag::new("savings").unwrap()],
        ))
        .await;

    let catalog = Arc::new(InMemoryCatalog::new());
    catalog
        .add_content(ContentItem::new(
            ContentId::new("c-savings").unwrap(),
            "Why save first",
            vec![TopicTag::new("savings").unwrap()],
        ))
        .await;
    catalog
        .add_quiz(QuizItem::new(
            QuizId::new("q-savings").unwrap(),
            "Savings basics",
            vec![TopicTag::new("savings").unwrap()],
        ))
        .await;

    let state = AppState::new(
        profiles,
        catalog,
        Arc::new(InMemoryActivityLedger::new()),
        Arc::new(InMemoryInvestmentLedger::new()),
        SuggestionEngine::default(),
    );
    api_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_responds_ok() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// =============================================================================
// Learning
// =============================================================================

#[tokio::test]
async fn progress_is_recorded_and_never_regresses() {
    let app = app().await;
    let uri = "/api/clients/asha/progress";

    let (status, body) = send(
        &app,
        Method::POST,
        uri,
        Some(json!({ "content_id": "c-savings", "completion": 40 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["authoritative_completion"], 40.0);

    let (_, body) = send(
        &app,
        Method::POST,
        uri,
        Some(json!({ "content_id": "c-savings", "completion": 20 })),
    )
    .await;
    assert_eq!(body["completion"], 20.0);
    assert_eq!(body["authoritative_completion"], 40.0);

    let (status, body) = send(&app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["completion"], 40.0);
    assert_eq!(body["items"][0]["entry_count"], 2);
    assert_eq!(body["items"][0]["mastered"], false);
}

#[tokio::test]
async fn out_of_range_completion_is_bad_request() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/clients/asha/progress",
        Some(json!({ "content_id": "c-savings", "completion": 140 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "completion");
}

#[tokio::test]
async fn unknown_content_is_not_found() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/clients/asha/progress",
        Some(json!({ "content_id": "c-missing", "completion": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CONTENT_NOT_FOUND");
}

#[tokio::test]
async fn quiz_submission_reports_pass() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/clients/asha/quizzes/q-savings/attempts",
        Some(json!({ "score": 85, "answers": [{ "question_id": "1", "answer": "b" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["passed"], true);
    assert_eq!(body["tags"][0], "savings");
}

#[tokio::test]
async fn progress_time_comes_from_the_server() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/clients/asha/progress",
        Some(json!({
            "content_id": "c-savings",
            "completion": 30,
            "viewed_at": "2099-01-01T00:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let viewed_at = body["viewed_at"].as_str().unwrap();
    assert!(!viewed_at.starts_with("2099"), "client time was stored: {}", viewed_at);
}

#[tokio::test]
async fn future_dated_quiz_attempt_is_bad_request() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/clients/asha/quizzes/q-savings/attempts",
        Some(json!({ "score": 10, "completed_at": "2099-01-01T00:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "completed_at");
}

#[tokio::test]
async fn unknown_client_is_not_found() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/clients/ghost/quizzes/q-savings/attempts",
        Some(json!({ "score": 85 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CLIENT_NOT_FOUND");
}

// =============================================================================
// Investments
// =============================================================================

#[tokio::test]
async fn investment_lifecycle_over_http() {
    let app = app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/clients/asha/investments",
        Some(json!({ "investment_type": "Fixed-Deposit", "amount": 5000 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "active");
    assert_eq!(created["investment_type"], "fixed-deposit");
    let id = created["id"].as_str().unwrap().to_string();
    let status_uri = format!("/api/investments/{}/status", id);

    let (status, body) = send(
        &app,
        Method::PATCH,
        &status_uri,
        Some(json!({ "new_status": "matured", "expected_status": "active", "returns": 400 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["investment"]["status"], "matured");
    assert_eq!(body["change"]["from"], "active");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &status_uri,
        Some(json!({ "new_status": "withdrawn", "expected_status": "matured" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");
    assert_eq!(body["details"]["from"], "matured");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &status_uri,
        Some(json!({ "new_status": "withdrawn", "expected_status": "active" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["details"]["actual"], "matured");

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/clients/asha/investments/summary",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matured"], 1);
    assert_eq!(body["total_invested"], 5000.0);
    assert_eq!(body["investments"][0]["history"][0]["to"], "matured");
}

#[tokio::test]
async fn unknown_status_value_is_bad_request() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/investments/{}/status", uuid::Uuid::new_v4()),
        Some(json!({ "new_status": "closed", "expected_status": "active" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "status");
}

#[tokio::test]
async fn malformed_investment_id_is_bad_request() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/investments/not-a-uuid/status",
        Some(json!({ "new_status": "matured", "expected_status": "active" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "investment_id");
}

#[tokio::test]
async fn missing_investment_is_not_found() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/investments/{}/status", uuid::Uuid::new_v4()),
        Some(json!({ "new_status": "matured", "expected_status": "active" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "INVESTMENT_NOT_FOUND");
}

// =============================================================================
// Suggestions
// =============================================================================

#[tokio::test]
async fn suggestions_follow_recorded_activity() {
    let app = app().await;
    send(
        &app,
        Method::POST,
        "/api/clients/asha/quizzes/q-savings/attempts",
        Some(json!({ "score": 90 })),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/api/clients/asha/suggestions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["client_id"], "asha");

    let suggestions = body["suggestions"].as_array().unwrap();
    let quiz = suggestions.iter().find(|s| s["kind"] == "quiz").unwrap();
    assert_eq!(quiz["payload"], "savings");
    assert_eq!(quiz["confidence"], 1.0);
    assert_eq!(quiz["metadata"]["quiz_id"], "q-savings");
}

#[tokio::test]
async fn suggestions_for_unknown_client_are_not_found() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api/clients/ghost/suggestions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CLIENT_NOT_FOUND");
}
