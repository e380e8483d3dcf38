//! Database schema for the SQLite seen-URL store

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- Already-processed URLs, in the order they were first seen
CREATE TABLE IF NOT EXISTS seen_urls (
    position INTEGER PRIMARY KEY,
    url TEXT NOT NULL UNIQUE
);
"#;

/// Initializes the database schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
