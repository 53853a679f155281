//! Item Database Library for the shopcode resolver
//!
//! This library provides the SQLite backend behind the
//! [`shopcode::RecordStore`] trait. The schema is the one the shop
//! plugin writes: a single `items` table keyed by integer id, with the
//! base64-encoded item payload in the `code` column.
//!
//! # Example
//!
//! ```no_run
//! use shopcode::RecordStore;
//! use shopcode_idb::SqliteDb;
//!
//! let db = SqliteDb::open("items.db").unwrap();
//! let record = db.lookup(10783).unwrap();
//! ```

pub mod sqlite;

// Re-export the backend
pub use sqlite::{SqliteDb, DEFAULT_DB_PATH};
