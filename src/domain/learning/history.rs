//! Learning history entries and the authoritative progress view.
//!
//! The ledger is append-only. Every call to record progress adds an entry;
//! the authoritative completion of a content item is the maximum completion
//! across all of its entries, so a client's progress never regresses and
//! concurrent appends commute.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ContentId, Metadata, Percentage, Timestamp, TopicTag};

use super::ContentItem;

/// One recorded view or completion update of a content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningHistoryEntry {
    pub content_id: ContentId,
    pub completion: Percentage,
    pub viewed_at: Timestamp,
    /// Tags of the content item at record time.
    pub tags: Vec<TopicTag>,
    /// Caller-supplied extras (time spent, device, ...).
    #[serde(default)]
    pub extra: Metadata,
}

impl LearningHistoryEntry {
    pub fn new(
        content: &ContentItem,
        completion: Percentage,
        viewed_at: Timestamp,
        extra: Metadata,
    ) -> Self {
        Self {
            content_id: content.id.clone(),
            completion,
            viewed_at,
            tags: content.tags.clone(),
            extra,
        }
    }
}

/// Authoritative progress of one content item, folded from its entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentProgress {
    pub content_id: ContentId,
    /// Maximum completion ever recorded.
    pub completion: Percentage,
    pub tags: Vec<TopicTag>,
    pub last_viewed_at: Timestamp,
    pub entry_count: usize,
}

impl ContentProgress {
    pub fn is_mastered(&self) -> bool {
        self.completion.is_complete()
    }
}

/// Folds history entries into the authoritative per-content view.
///
/// Tags come from the most recent entry so catalog re-tagging is picked up.
pub fn authoritative_progress(
    entries: &[LearningHistoryEntry],
) -> BTreeMap<ContentId, ContentProgress> {
    let mut view: BTreeMap<ContentId, ContentProgress> = BTreeMap::new();
    for entry in entries {
        match view.get_mut(&entry.content_id) {
            Some(progress) => {
                progress.completion = progress.completion.max(entry.completion);
                progress.entry_count += 1;
                if !entry.viewed_at.is_before(&progress.last_viewed_at) {
                    progress.last_viewed_at = entry.viewed_at;
                    progress.tags = entry.tags.clone();
                }
            }
            None => {
                view.insert(
                    entry.content_id.clone(),
                    ContentProgress {
                        content_id: entry.content_id.clone(),
                        completion: entry.completion,
                        tags: entry.tags.clone(),
                        last_viewed_at: entry.viewed_at,
                        entry_count: 1,
                    },
                );
            }
        }
    }
    view
}

/// Authoritative completion of a single content item, if it was ever viewed.
pub fn authoritative_completion(
    entries: &[LearningHistoryEntry],
    content_id: &ContentId,
) -> Option<Percentage> {
    entries
        .iter()
        .filter(|e| &e.content_id == content_id)
        .map(|e| e.completion)
        .reduce(Percentage::max)
}
