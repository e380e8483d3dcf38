//! Storage traits and error types
//!
//! This module defines the interface for seen-URL store backends and
//! associated error types.

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed seen-URL file {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A persisted, order-preserving set of already-processed URLs
///
/// Backends load their full contents when opened, keep every mutation in
/// memory, and write everything back in one go when `persist` is called.
pub trait SeenStore: Send {
    /// Returns true if `url` has been processed before
    fn contains(&self, url: &str) -> bool;

    /// Appends `url` unless already present
    ///
    /// # Returns
    ///
    /// `true` if the URL was newly added
    fn insert(&mut self, url: &str) -> bool;

    /// All known URLs in insertion order
    fn urls(&self) -> &[String];

    fn len(&self) -> usize {
        self.urls().len()
    }

    fn is_empty(&self) -> bool {
        self.urls().is_empty()
    }

    /// Writes the full in-memory contents to the backing store
    fn persist(&mut self) -> StorageResult<()>;
}
