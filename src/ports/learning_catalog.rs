//! LearningCatalog port for content and quiz metadata.

use async_trait::async_trait;

use crate::domain::foundation::{ContentId, DomainError, QuizId};
use crate::domain::learning::{ContentItem, QuizItem};

/// Read access to the catalog of learning content and quizzes.
///
/// The catalog supplies the topic tags that progress and quiz attempts are
/// filed under, and the candidate pool for content and quiz suggestions.
#[async_trait]
pub trait LearningCatalog: Send + Sync {
    /// Find a content item by id. Returns `None` if not in the catalog.
    async fn find_content(&self, id: &ContentId) -> Result<Option<ContentItem>, DomainError>;

    /// Find a quiz by id. Returns `None` if not in the catalog.
    async fn find_quiz(&self, id: &QuizId) -> Result<Option<QuizItem>, DomainError>;

    /// All content items, ordered by id.
    async fn list_content(&self) -> Result<Vec<ContentItem>, DomainError>;

    /// All quizzes, ordered by id.
    async fn list_quizzes(&self) -> Result<Vec<QuizItem>, DomainError>;
}
