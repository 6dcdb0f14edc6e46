//! PostgreSQL implementation of LearningCatalog.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{ContentId, DomainError, ErrorCode, QuizId, TopicTag};
use crate::domain::learning::{ContentItem, QuizItem};
use crate::ports::LearningCatalog;

/// Reads `content_items` and `quizzes`.
pub struct PostgresCatalog {
    pool: PgPool,
}

impl PostgresCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Shared row shape for content items and quizzes.
#[derive(Debug, sqlx::FromRow)]
struct CatalogRow {
    id: String,
    title: String,
    tags: Vec<String>,
}

impl TryFrom<CatalogRow> for ContentItem {
    type Error = DomainError;

    fn try_from(row: CatalogRow) -> Result<Self, Self::Error> {
        let id = ContentId::new(row.id).map_err(corrupt)?;
        let tags = TopicTag::parse_all(row.tags.iter()).map_err(corrupt)?;
        Ok(ContentItem::new(id, row.title, tags))
    }
}

impl TryFrom<CatalogRow> for QuizItem {
    type Error = DomainError;

    fn try_from(row: CatalogRow) -> Result<Self, Self::Error> {
        let id = QuizId::new(row.id).map_err(corrupt)?;
        let tags = TopicTag::parse_all(row.tags.iter()).map_err(corrupt)?;
        Ok(QuizItem::new(id, row.title, tags))
    }
}

fn corrupt(err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Invalid catalog row: {}", err))
}

#[async_trait]
impl LearningCatalog for PostgresCatalog {
    async fn find_content(&self, id: &ContentId) -> Result<Option<ContentItem>, DomainError> {
        let row: Option<CatalogRow> =
            sqlx::query_as("SELECT id, title, tags FROM content_items WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to fetch content: {}", e)))?;

        row.map(ContentItem::try_from).transpose()
    }

    async fn find_quiz(&self, id: &QuizId) -> Result<Option<QuizItem>, DomainError> {
        let row: Option<CatalogRow> =
            sqlx::query_as("SELECT id, title, tags FROM quizzes WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to fetch quiz: {}", e)))?;

        row.map(QuizItem::try_from).transpose()
    }

    async fn list_content(&self) -> Result<Vec<ContentItem>, DomainError> {
        let rows: Vec<CatalogRow> =
            sqlx::query_as("SELECT id, title, tags FROM content_items ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to list content: {}", e)))?;

        rows.into_iter().map(ContentItem::try_from).collect()
    }

    async fn list_quizzes(&self) -> Result<Vec<QuizItem>, DomainError> {
        let rows: Vec<CatalogRow> = sqlx::query_as("SELECT id, title, tags FROM quizzes ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list quizzes: {}", e)))?;

        rows.into_iter().map(QuizItem::try_from).collect()
    }
}
