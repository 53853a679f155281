//! SQLite implementation using rusqlite (synchronous).
//!
//! The `items` table matches the layout the shop plugin writes:
//! `id INTEGER PRIMARY KEY, code TEXT NOT NULL`, where `code` holds the
//! base64-encoded serialized payload.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use shopcode::{ItemRecord, RecordStore, StoreError, StoreResult};

/// Default database location
pub const DEFAULT_DB_PATH: &str = "items.db";

/// SQLite-backed item database
#[derive(Debug)]
pub struct SqliteDb {
    conn: Connection,
}

impl SqliteDb {
    /// Open or create the database
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path.as_ref())?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Initialize the database schema
    pub fn init(&self) -> StoreResult<()> {
        self.conn
            .execute_batch(
                r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY,
                code TEXT NOT NULL
            );
            "#,
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    /// Number of item records
    pub fn item_count(&self) -> StoreResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    /// Smallest and largest record id, when any records exist
    pub fn id_range(&self) -> StoreResult<Option<(i64, i64)>> {
        let range: (Option<i64>, Option<i64>) = self
            .conn
            .query_row("SELECT MIN(id), MAX(id) FROM items", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .map_err(|e| StoreError::Database(e.to_string()))?;
        match range {
            (Some(min), Some(max)) => Ok(Some((min, max))),
            _ => Ok(None),
        }
    }
}

impl RecordStore for SqliteDb {
    fn lookup(&self, id: i64) -> StoreResult<Option<ItemRecord>> {
        self.conn
            .query_row(
                "SELECT id, code FROM items WHERE id = ?1",
                params![id],
                |row| {
                    Ok(ItemRecord {
                        id: row.get(0)?,
                        payload: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}
