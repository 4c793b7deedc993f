//! Single-file JSON backend.
//!
//! The whole key space is kept in memory and written back to one JSON file
//! on every change. Writes go to a sibling temp file first and are renamed
//! into place, so a crash never leaves a half-written store. A change only
//! reaches the in-memory map once it is on disk.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::KvStore;
use crate::error::StoreError;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| StoreError::Serialization {
                    key: path.display().to_string(),
                    source,
                })?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(path = %path.display(), keys = entries.len(), "File store opened");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries).map_err(|source| {
            StoreError::Serialization {
                key: self.path.display().to_string(),
                source,
            }
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        tracing::debug!(path = %self.path.display(), keys = entries.len(), "File store flushed");
        Ok(())
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        let mut next = entries.clone();
        next.insert(key.to_string(), value);
        self.flush(&next).await?;
        *entries = next;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().await;
        if !entries.contains_key(key) {
            return Ok(false);
        }
        let mut next = entries.clone();
        next.remove(key);
        self.flush(&next).await?;
        *entries = next;
        Ok(true)
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("state.json")).await.unwrap();
        assert!(store.keys().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let store = FileStore::open(&path).await.unwrap();
        store.set("castline.x", r#"{"a":1}"#.into()).await.unwrap();
        store.set("castline.y", "2".into()).await.unwrap();
        assert!(store.remove("castline.y").await.unwrap());
        drop(store);

        let reopened = FileStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("castline.x").await.unwrap().as_deref(),
            Some(r#"{"a":1}"#)
        );
        assert_eq!(reopened.get("castline.y").await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        assert_matches!(
            FileStore::open(&path).await,
            Err(StoreError::Serialization { .. })
        );
    }

    #[tokio::test]
    async fn failed_flush_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let store = FileStore::open(&path).await.unwrap();
        store.set("castline.x", "1".into()).await.unwrap();

        // A directory where the temp file goes makes every flush fail.
        tokio::fs::create_dir(path.with_extension("tmp")).await.unwrap();

        assert_matches!(
            store.set("castline.x", "2".into()).await,
            Err(StoreError::Io(_))
        );
        assert_matches!(store.remove("castline.x").await, Err(StoreError::Io(_)));
        assert_matches!(
            store.set("castline.y", "3".into()).await,
            Err(StoreError::Io(_))
        );

        assert_eq!(store.get("castline.x").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("castline.y").await.unwrap(), None);
        let on_disk = FileStore::open(&path).await.unwrap();
        assert_eq!(on_disk.get("castline.x").await.unwrap().as_deref(), Some("1"));
    }
}
