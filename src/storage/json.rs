//! Seen-URL store backed by a flat JSON array

use crate::storage::{SeenStore, SeenUrls, StorageError, StorageResult};
use std::path::{Path, PathBuf};

/// Seen-URL store serialized as a JSON array of strings
#[derive(Debug)]
pub struct JsonSeenStore {
    path: PathBuf,
    urls: SeenUrls,
}

impl JsonSeenStore {
    /// Loads the store from `path`, writing an empty array there if it is missing
    pub fn open(path: &Path) -> StorageResult<Self> {
        let mut store = Self {
            path: path.to_path_buf(),
            urls: SeenUrls::new(),
        };

        if !path.exists() {
            tracing::debug!("Creating empty seen-URL file at {}", path.display());
            store.persist()?;
            return Ok(store);
        }

        let content = std::fs::read_to_string(path).map_err(|source| store.io_error(source))?;
        let loaded: Vec<String> =
            serde_json::from_str(&content).map_err(|source| StorageError::Json {
                path: path.display().to_string(),
                source,
            })?;

        let total = loaded.len();
        store.urls = loaded.into_iter().collect();
        if store.urls.as_slice().len() != total {
            tracing::warn!(
                "Dropped {} duplicate entries from {}",
                total - store.urls.as_slice().len(),
                path.display()
            );
        }
        tracing::debug!(
            "Loaded {} seen URLs from {}",
            store.urls.as_slice().len(),
            path.display()
        );

        Ok(store)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl SeenStore for JsonSeenStore {
    fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    fn insert(&mut self, url: &str) -> bool {
        self.urls.insert(url)
    }

    fn urls(&self) -> &[String] {
        self.urls.as_slice()
    }

    fn persist(&mut self) -> StorageResult<()> {
        let content =
            serde_json::to_string(self.urls.as_slice()).map_err(|source| StorageError::Json {
                path: self.path.display().to_string(),
                source,
            })?;
        std::fs::write(&self.path, content).map_err(|source| self.io_error(source))
    }
}
