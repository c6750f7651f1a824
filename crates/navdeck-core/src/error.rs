//! Error types for `navdeck-core`.

use navdeck_storage::StorageError;

/// Errors from board-store operations.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The referenced card does not exist in the stored list.
    #[error("card '{id}' not found")]
    NotFound { id: String },

    /// Failed to serialize a document before writing it.
    #[error("failed to encode {doc} document: {reason}")]
    Encode { doc: &'static str, reason: String },

    /// The underlying storage backend returned an error.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The requested search engine name is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("unknown search engine '{name}'")]
pub struct UnknownEngine {
    pub name: String,
}
