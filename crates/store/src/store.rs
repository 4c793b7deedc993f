//! Typed JSON access over a [`KvStore`] backend.

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::backend::{KvStore, MemoryStore};
use crate::error::StoreError;
use crate::file::FileStore;

/// Shared handle to the key-value store.
///
/// Cheaply cloneable. Read-modify-write cycles made through
/// [`Store::update`] are serialized, so concurrent updates to a key never
/// lose writes.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KvStore>,
    write_lock: Arc<Mutex<()>>,
}

impl Store {
    pub fn new(backend: impl KvStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Open a file-backed store.
    pub async fn open_file(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Ok(Self::new(FileStore::open(path).await?))
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get(key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::Serialization {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Read a value, falling back to `T::default()` when the key is unset.
    pub async fn get_or_default<T: DeserializeOwned + Default>(
        &self,
        key: &str,
    ) -> Result<T, StoreError> {
        Ok(self.get(key).await?.unwrap_or_default())
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write(key, value).await
    }

    pub async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        self.backend.remove(key).await
    }

    pub async fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.backend.keys().await
    }

    /// Read-modify-write a value.
    ///
    /// `f` receives the current value (or `T::default()`); the value is
    /// written back only if `f` returns `Ok`.
    pub async fn update<T, R, E, F>(&self, key: &str, f: F) -> Result<R, E>
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(&mut T) -> Result<R, E>,
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut value: T = self.get_or_default(key).await?;
        let result = f(&mut value)?;
        self.write(key, &value).await?;
        Ok(result)
    }

    async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, raw).await
    }
}
