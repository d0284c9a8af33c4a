//! Database schema definitions
//!
//! This module contains the SQL schema for the quotegrab database.

/// SQL schema for the database
///
/// One row per extracted record. Tags are stored as a single
/// comma-joined string, not normalized. There is no uniqueness
/// constraint: re-running the scraper against the same site inserts
/// duplicate rows.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    text TEXT NOT NULL,
    author TEXT NOT NULL,
    tags TEXT NOT NULL
);
"#;

/// Initializes the database schema
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Returns
///
/// * `Ok(())` - Schema initialized successfully
/// * `Err(rusqlite::Error)` - Failed to initialize schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
