//! Storage module for persisting scraped quotes
//!
//! This module handles all database operations for the scraper, including:
//! - SQLite database initialization and schema management
//! - Best-effort, per-record quote insertion

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStorage;
pub use traits::{Storage, StorageError, StorageResult};

use crate::quote::Quote;
use crate::ScrapeError;

use std::path::Path;

/// Initializes or opens a storage database
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(SqliteStorage)` - Successfully initialized storage
/// * `Err(ScrapeError)` - Failed to initialize storage
pub fn open_storage(path: &Path) -> Result<SqliteStorage, ScrapeError> {
    SqliteStorage::new(path)
}

/// Outcome of a best-effort insert pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertReport {
    /// Rows written
    pub inserted: usize,

    /// Records whose insert failed and was skipped
    pub failed: usize,
}

/// Inserts each quote as its own row
///
/// Inserts are independent and unwrapped by any transaction: a failed
/// row is logged and skipped, and the loop moves on to the next record.
/// Persisting the same records twice doubles the rows.
///
/// # Arguments
///
/// * `storage` - The persistence backend
/// * `quotes` - The records to insert, in order
///
/// # Returns
///
/// An InsertReport with inserted and failed counts
pub fn persist_quotes<S: Storage>(storage: &mut S, quotes: &[Quote]) -> InsertReport {
    let mut report = InsertReport::default();

    for quote in quotes {
        match storage.insert_quote(quote) {
            Ok(_) => report.inserted += 1,
            Err(e) => {
                tracing::warn!("Failed to insert quote by '{}': {}", quote.author, e);
                report.failed += 1;
            }
        }
    }

    report
}
