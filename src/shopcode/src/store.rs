//! Record storage interface
//!
//! Item records live in an external database keyed by integer id. The
//! resolver only needs point lookups, expressed through [`RecordStore`]
//! so any backing store can be plugged in. The bundled SQLite
//! implementation lives in the `shopcode-idb` crate.

/// One row of the item database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    /// Primary key, the decoded item id
    pub id: i64,
    /// Base64-encoded serialized payload
    pub payload: String,
}

/// Errors reported by a record store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Point lookups against the item database
pub trait RecordStore {
    /// Fetch the record with the given id. `Ok(None)` means the id is
    /// not present, as opposed to a store failure.
    fn lookup(&self, id: i64) -> StoreResult<Option<ItemRecord>>;
}
