//! Catalog entries: the content items and quizzes that exist.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ContentId, QuizId, TopicTag};

/// A piece of learning content (article, video, lesson).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    pub title: String,
    pub tags: Vec<TopicTag>,
}

impl ContentItem {
    pub fn new(id: ContentId, title: impl Into<String>, tags: Vec<TopicTag>) -> Self {
        Self {
            id,
            title: title.into(),
            tags,
        }
    }
}

/// A quiz and the topics it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub id: QuizId,
    pub title: String,
    pub tags: Vec<TopicTag>,
}

impl QuizItem {
    pub fn new(id: QuizId, title: impl Into<String>, tags: Vec<TopicTag>) -> Self {
        Self {
            id,
            title: title.into(),
            tags,
        }
    }

    pub fn covers(&self, topic: &TopicTag) -> bool {
        self.tags.contains(topic)
    }
}
