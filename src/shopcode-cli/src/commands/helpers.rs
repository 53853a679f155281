//! Shared helpers for command handlers

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use shopcode_idb::{SqliteDb, DEFAULT_DB_PATH};

use crate::config::Config;

/// Pick the database path: the explicit flag (or SHOPCODE_DB) first,
/// then the configured default, then `items.db`.
pub fn resolve_db_path(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    let config = Config::load()?;
    if let Some(path) = config.get_db_path() {
        return Ok(path.to_path_buf());
    }

    Ok(PathBuf::from(DEFAULT_DB_PATH))
}

/// Open the items database at a known path.
///
/// A missing file is an error: opening it would silently create an
/// empty database and every lookup would come back not-found.
pub fn open_store_at(path: &Path) -> Result<SqliteDb> {
    if !path.exists() {
        bail!(
            "Items database not found at {} (use --db, SHOPCODE_DB, or `shopcode configure --db`)",
            path.display()
        );
    }
    SqliteDb::open(path).with_context(|| format!("Failed to open database at {}", path.display()))
}

/// Resolve the database path and open it
pub fn open_store(flag: Option<&Path>) -> Result<SqliteDb> {
    let path = resolve_db_path(flag)?;
    open_store_at(&path)
}
