//! Repository for the recent-activity journal.

use castline_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::keys;
use crate::store::Store;

/// Entries kept in the journal; older ones are dropped.
pub const MAX_ACTIVITY_ENTRIES: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub event_type: String,
    pub source_entity_type: Option<String>,
    pub source_entity_id: Option<String>,
    pub payload: serde_json::Value,
    pub timestamp: Timestamp,
}

pub struct ActivityRepo;

impl ActivityRepo {
    /// Record an entry at the front of the journal.
    pub async fn record(store: &Store, entry: ActivityEntry) -> Result<(), StoreError> {
        store
            .update(keys::ACTIVITY, |entries: &mut Vec<ActivityEntry>| {
                entries.insert(0, entry);
                entries.truncate(MAX_ACTIVITY_ENTRIES);
                Ok(())
            })
            .await
    }

    /// Most recent entries first.
    pub async fn recent(store: &Store, limit: usize) -> Result<Vec<ActivityEntry>, StoreError> {
        let mut entries: Vec<ActivityEntry> = store.get_or_default(keys::ACTIVITY).await?;
        entries.truncate(limit);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn entry(n: usize) -> ActivityEntry {
        ActivityEntry {
            event_type: format!("test.{n}"),
            source_entity_type: None,
            source_entity_id: None,
            payload: serde_json::json!({}),
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn newest_first_and_limited() {
        let store = Store::in_memory();
        for n in 0..3 {
            ActivityRepo::record(&store, entry(n)).await.unwrap();
        }
        let recent = ActivityRepo::recent(&store, 2).await.unwrap();
        let types: Vec<&str> = recent.iter().map(|e| e.event_type.as_str()).collect();
        assert_eq!(types, vec!["test.2", "test.1"]);
    }

    #[tokio::test]
    async fn journal_is_capped() {
        let store = Store::in_memory();
        for n in 0..(MAX_ACTIVITY_ENTRIES + 5) {
            ActivityRepo::record(&store, entry(n)).await.unwrap();
        }
        let all = ActivityRepo::recent(&store, usize::MAX).await.unwrap();
        assert_eq!(all.len(), MAX_ACTIVITY_ENTRIES);
    }
}
