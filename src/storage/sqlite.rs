//! SQLite seen-URL store implementation

use crate::storage::schema::initialize_schema;
use crate::storage::{SeenStore, SeenUrls, StorageResult};
use rusqlite::{params, Connection};
use std::path::Path;

/// Seen-URL store kept in a SQLite database
///
/// Like the JSON backend, the table is read once on open and rewritten in
/// full, inside one transaction, on `persist`.
pub struct SqliteSeenStore {
    conn: Connection,
    urls: SeenUrls,
}

impl SqliteSeenStore {
    /// Opens (or creates) the database at `path` and loads every seen URL
    pub fn open(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
        ",
        )?;
        Self::from_connection(conn)
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StorageResult<Self> {
        initialize_schema(&conn)?;

        let urls = {
            let mut stmt = conn.prepare("SELECT url FROM seen_urls ORDER BY position")?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
            rows.collect::<Result<SeenUrls, _>>()?
        };
        tracing::debug!("Loaded {} seen URLs from SQLite", urls.as_slice().len());

        Ok(Self { conn, urls })
    }
}

impl SeenStore for SqliteSeenStore {
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
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM seen_urls", [])?;
        {
            let mut stmt = tx.prepare("INSERT INTO seen_urls (position, url) VALUES (?1, ?2)")?;
            for (position, url) in self.urls.as_slice().iter().enumerate() {
                stmt.execute(params![position as i64, url])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
