//! Storage backend abstraction for navdeck.
//!
//! This crate defines the [`StorageBackend`] trait — a minimal key-value
//! interface that knows nothing about cards, groups, or the HTTP API. The
//! board store in `navdeck-core` sits on top of a backend and treats each
//! value as one JSON document.
//!
//! Two implementations are provided:
//!
//! - [`RedbBackend`] — persistent default, backed by redb (feature `redb-backend`)
//! - [`MemoryBackend`] — in-memory, for tests and throwaway runs

mod error;
mod memory;
#[cfg(feature = "redb-backend")]
mod redb_backend;

pub use error::StorageError;
pub use memory::MemoryBackend;
#[cfg(feature = "redb-backend")]
pub use redb_backend::RedbBackend;

/// A pluggable key-value storage backend.
///
/// Keys are UTF-8 strings using `/` as a separator (e.g. `nav/cards`,
/// `nav/groups`). Values are opaque byte arrays — the caller decides the
/// encoding. Writes replace the whole value; there are no partial updates
/// and no compare-and-swap, so the last writer wins.
///
/// Implementations must be safe to share across async tasks (`Send + Sync`).
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync + 'static {
    /// Retrieve a value by key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the underlying backend fails.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store a key-value pair, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the underlying backend fails.
    async fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Delete a key. Idempotent — deleting a non-existent key is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Delete`] if the underlying backend fails.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}
