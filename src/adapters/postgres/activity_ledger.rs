//! PostgreSQL implementation of ActivityLedger.
//!
//! Both tables are append-only; nothing here updates or deletes a row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{
    ClientId, ContentId, DomainError, ErrorCode, Metadata, Percentage, QuizId, Timestamp,
    TopicTag,
};
use crate::domain::learning::{ActivitySnapshot, LearningHistoryEntry, QuizAnswer, QuizAttempt};
use crate::ports::ActivityLedger;

pub struct PostgresActivityLedger {
    pool: PgPool,
}

impl PostgresActivityLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct QuizAttemptRow {
    quiz_id: String,
    score: f64,
    tags: Vec<String>,
    answers: serde_json::Value,
    completed_at: DateTime<Utc>,
}

impl TryFrom<QuizAttemptRow> for QuizAttempt {
    type Error = DomainError;

    fn try_from(row: QuizAttemptRow) -> Result<Self, Self::Error> {
        let answers: Vec<QuizAnswer> = serde_json::from_value(row.answers).map_err(corrupt)?;
        Ok(QuizAttempt {
            quiz_id: QuizId::new(row.quiz_id).map_err(corrupt)?,
            score: Percentage::try_new("score", row.score).map_err(corrupt)?,
            completed_at: Timestamp::from_datetime(row.completed_at),
            tags: TopicTag::parse_all(row.tags.iter()).map_err(corrupt)?,
            answers,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LearningRow {
    content_id: String,
    completion: f64,
    tags: Vec<String>,
    extra: serde_json::Value,
    viewed_at: DateTime<Utc>,
}

impl TryFrom<LearningRow> for LearningHistoryEntry {
    type Error = DomainError;

    fn try_from(row: LearningRow) -> Result<Self, Self::Error> {
        let extra: Metadata = serde_json::from_value(row.extra).map_err(corrupt)?;
        Ok(LearningHistoryEntry {
            content_id: ContentId::new(row.content_id).map_err(corrupt)?,
            completion: Percentage::try_new("completion", row.completion).map_err(corrupt)?,
            viewed_at: Timestamp::from_datetime(row.viewed_at),
            tags: TopicTag::parse_all(row.tags.iter()).map_err(corrupt)?,
            extra,
        })
    }
}

fn corrupt(err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Invalid activity row: {}", err))
}

fn tag_strings(tags: &[TopicTag]) -> Vec<String> {
    tags.iter().map(|t| t.as_str().to_string()).collect()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value).map_err(|e| {
        DomainError::new(ErrorCode::InternalError, format!("Failed to encode JSON: {}", e))
    })
}

#[async_trait]
impl ActivityLedger for PostgresActivityLedger {
    async fn append_quiz_attempt(
        &self,
        client_id: &ClientId,
        attempt: &QuizAttempt,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO quiz_attempts (client_id, quiz_id, score, tags, answers, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(client_id.as_str())
        .bind(attempt.quiz_id.as_str())
        .bind(attempt.score.value())
        .bind(tag_strings(&attempt.tags))
        .bind(to_json(&attempt.answers)?)
        .bind(attempt.completed_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to append quiz attempt: {}", e)))?;

        Ok(())
    }

    async fn append_learning_entry(
        &self,
        client_id: &ClientId,
        entry: &LearningHistoryEntry,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO learning_history (client_id, content_id, completion, tags, extra, viewed_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(client_id.as_str())
        .bind(entry.content_id.as_str())
        .bind(entry.completion.value())
        .bind(tag_strings(&entry.tags))
        .bind(to_json(&entry.extra)?)
        .bind(entry.viewed_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to append learning entry: {}", e)))?;

        Ok(())
    }

    async fn snapshot(&self, client_id: &ClientId) -> Result<ActivitySnapshot, DomainError> {
        let attempts: Vec<QuizAttemptRow> = sqlx::query_as(
            r#"
            SELECT quiz_id, score, tags, answers, completed_at
            FROM quiz_attempts
            WHERE client_id = $1
            ORDER BY id
            "#,
        )
        .bind(client_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load quiz attempts: {}", e)))?;

        let history: Vec<LearningRow> = sqlx::query_as(
            r#"
            SELECT content_id, completion, tags, extra, viewed_at
            FROM learning_history
            WHERE client_id = $1
            ORDER BY id
            "#,
        )
        .bind(client_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load learning history: {}", e)))?;

        Ok(ActivitySnapshot {
            quiz_attempts: attempts
                .into_iter()
                .map(QuizAttempt::try_from)
                .collect::<Result<_, _>>()?,
            learning_history: history
                .into_iter()
                .map(LearningHistoryEntry::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}
