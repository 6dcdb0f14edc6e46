//! Topic tag value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A normalized topic tag (trimmed, lower-case, non-empty).
///
/// Goals, quiz tags, content tags and investment types all share this
/// vocabulary so "Savings " and "savings" count as the same topic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TopicTag(String);

impl TopicTag {
    /// Creates a normalized tag, rejecting blank input.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = raw.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("tag"));
        }
        Ok(Self(normalized))
    }

    /// Parses a list of tags, skipping duplicates while keeping first-seen order.
    pub fn parse_all<I, S>(raw: I) -> Result<Vec<Self>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<Self> = Vec::new();
        for item in raw {
            let tag = Self::new(item)?;
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Ok(tags)
    }

    /// Returns the tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TopicTag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TopicTag> for String {
    fn from(tag: TopicTag) -> Self {
        tag.0
    }
}

impl fmt::Display for TopicTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
