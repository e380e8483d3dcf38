//! Storage module for the seen-URL store
//!
//! This module handles remembering which URLs were already processed, across
//! runs. Two backends are provided:
//! - a flat JSON array of URL strings (the default)
//! - a SQLite table, chosen when the path ends in `.db`, `.sqlite` or `.sqlite3`
//!
//! Both are loaded in full when opened and overwritten in full on `persist`.

mod json;
mod schema;
mod sqlite;
mod traits;

pub use json::JsonSeenStore;
pub use sqlite::SqliteSeenStore;
pub use traits::{SeenStore, StorageError, StorageResult};

use std::collections::HashSet;
use std::path::Path;

const SQLITE_EXTENSIONS: &[&str] = &["db", "sqlite", "sqlite3"];

/// Opens the seen-URL store at `path`, creating it empty if absent
///
/// The backend is picked from the file extension.
///
/// # Returns
///
/// * `Ok(Box<dyn SeenStore>)` - The loaded store
/// * `Err(StorageError)` - The file exists but could not be read or parsed
pub fn open_seen_store(path: &Path) -> StorageResult<Box<dyn SeenStore>> {
    let is_sqlite = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SQLITE_EXTENSIONS.contains(&ext.to_lowercase().as_str()));

    if is_sqlite {
        Ok(Box::new(SqliteSeenStore::open(path)?))
    } else {
        Ok(Box::new(JsonSeenStore::open(path)?))
    }
}

/// In-memory URL list with constant-time membership checks
#[derive(Debug, Clone, Default)]
pub struct SeenUrls {
    order: Vec<String>,
    index: HashSet<String>,
}

impl SeenUrls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.index.contains(url)
    }

    /// Appends `url` unless present; returns true if it was added
    pub fn insert(&mut self, url: &str) -> bool {
        if self.index.insert(url.to_string()) {
            self.order.push(url.to_string());
            true
        } else {
            false
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }
}

impl FromIterator<String> for SeenUrls {
    /// Builds the set keeping the first occurrence of each URL
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut urls = Self::new();
        for url in iter {
            urls.insert(&url);
        }
        urls
    }
}
