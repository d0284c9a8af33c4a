//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the Storage trait.

use crate::quote::Quote;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{Storage, StorageResult};
use crate::ScrapeError;
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// Opening the database is the connection check of the program: a
    /// failure here is fatal and happens before any network activity.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(ScrapeError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, ScrapeError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
        ",
        )?;

        // Initialize schema
        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self, ScrapeError> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl Storage for SqliteStorage {
    fn insert_quote(&mut self, quote: &Quote) -> StorageResult<i64> {
        self.conn.execute(
            "INSERT INTO quotes (text, author, tags) VALUES (?1, ?2, ?3)",
            params![quote.text, quote.author, quote.joined_tags()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn count_quotes(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn count_authors(&self) -> StorageResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(DISTINCT author) FROM quotes",
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}
