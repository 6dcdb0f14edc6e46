//! In-Memory Learning Catalog

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ContentId, DomainError, QuizId};
use crate::domain::learning::{ContentItem, QuizItem};
use crate::ports::LearningCatalog;

/// In-memory catalog of content items and quizzes, kept in id order
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    content: Arc<RwLock<BTreeMap<ContentId, ContentItem>>>,
    quizzes: Arc<RwLock<BTreeMap<QuizId, QuizItem>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_content(&self, item: ContentItem) {
        self.content.write().await.insert(item.id.clone(), item);
    }

    pub async fn add_quiz(&self, quiz: QuizItem) {
        self.quizzes.write().await.insert(quiz.id.clone(), quiz);
    }
}

#[async_trait]
impl LearningCatalog for InMemoryCatalog {
    async fn find_content(&self, id: &ContentId) -> Result<Option<ContentItem>, DomainError> {
        Ok(self.content.read().await.get(id).cloned())
    }

    async fn find_quiz(&self, id: &QuizId) -> Result<Option<QuizItem>, DomainError> {
        Ok(self.quizzes.read().await.get(id).cloned())
    }

    async fn list_content(&self) -> Result<Vec<ContentItem>, DomainError> {
        Ok(self.content.read().await.values().cloned().collect())
    }

    async fn list_quizzes(&self) -> Result<Vec<QuizItem>, DomainError> {
        Ok(self.quizzes.read().await.values().cloned().collect())
    }
}
