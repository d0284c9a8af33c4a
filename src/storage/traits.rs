//! Storage traits and error types
//!
//! This module defines the trait interface for persistence backends and
//! associated error types.

use crate::quote::Quote;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for persistence backend implementations
///
/// Each quote maps to exactly one row. The backend makes no attempt to
/// deduplicate: inserting the same quote twice stores two rows.
pub trait Storage {
    /// Inserts one quote as one row
    ///
    /// # Arguments
    ///
    /// * `quote` - The record to persist; tags are comma-joined
    ///
    /// # Returns
    ///
    /// The rowid of the inserted row
    fn insert_quote(&mut self, quote: &Quote) -> StorageResult<i64>;

    /// Total number of stored quotes
    fn count_quotes(&self) -> StorageResult<u64>;

    /// Number of distinct authors
    fn count_authors(&self) -> StorageResult<u64>;
}
