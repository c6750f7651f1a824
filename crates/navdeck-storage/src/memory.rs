//! In-memory storage backend.
//!
//! Stores all data in a `BTreeMap` behind a `RwLock`. Nothing is persisted —
//! every run starts from an empty map, so the board store re-seeds on first
//! read. Used by the test suites and by `NAVDECK_STORAGE=memory` runs.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{StorageBackend, StorageError};

/// An in-memory storage backend backed by a `BTreeMap`.
///
/// Thread-safe and async-compatible; clones share the same map.
///
/// # Examples
///
/// ```
/// # use navdeck_storage::{MemoryBackend, StorageBackend};
/// # #[tokio::main]
/// # async fn main() {
/// let backend = MemoryBackend::new();
/// backend.put("nav/cards", b"[]").await.unwrap();
/// let val = backend.get("nav/cards").await.unwrap();
/// assert_eq!(val, Some(b"[]".to_vec()));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    data: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryBackend {
    /// Create a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl StorageBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let data = self.data.read().await;
        Ok(data.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut data = self.data.write().await;
        data.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut data = self.data.write().await;
        data.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let backend = MemoryBackend::new();
        let result = backend.get("nav/cards").await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn put_and_get_roundtrip() {
        let backend = MemoryBackend::new();
        backend.put("nav/cards", b"[1,2,3]").await.unwrap();
        let val = backend.get("nav/cards").await.unwrap();
        assert_eq!(val, Some(b"[1,2,3]".to_vec()));
    }

    #[tokio::test]
    async fn put_overwrites_existing() {
        let backend = MemoryBackend::new();
        backend.put("nav/groups", b"[\"a\"]").await.unwrap();
        backend.put("nav/groups", b"[\"b\"]").await.unwrap();
        let val = backend.get("nav/groups").await.unwrap();
        assert_eq!(val, Some(b"[\"b\"]".to_vec()));
    }

    #[tokio::test]
    async fn delete_existing_key() {
        let backend = MemoryBackend::new();
        backend.put("nav/cards", b"[]").await.unwrap();
        backend.delete("nav/cards").await.unwrap();
        let val = backend.get("nav/cards").await.unwrap();
        assert_eq!(val, None);
    }

    #[tokio::test]
    async fn delete_nonexistent_is_noop() {
        let backend = MemoryBackend::new();
        backend.delete("nav/never-written").await.unwrap();
    }

    #[tokio::test]
    async fn clone_shares_state() {
        let backend = MemoryBackend::new();
        let clone = backend.clone();
        backend.put("nav/cards", b"[]").await.unwrap();
        let val = clone.get("nav/cards").await.unwrap();
        assert_eq!(val, Some(b"[]".to_vec()));
    }
}
