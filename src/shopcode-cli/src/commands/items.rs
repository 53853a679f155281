//! Database inspection handlers

use anyhow::Result;
use std::path::Path;

use shopcode::fetch_metadata;

use super::helpers::{open_store, open_store_at, resolve_db_path};

/// Print the metadata YAML stored for a record id
pub fn inspect(id: i64, db: Option<&Path>) -> Result<()> {
    let store = open_store(db)?;
    let meta = fetch_metadata(&store, id)?;

    let yaml = meta.source();
    if yaml.ends_with('\n') {
        print!("{}", yaml);
    } else {
        println!("{}", yaml);
    }

    Ok(())
}

/// Print record count and id range of the database
pub fn stats(db: Option<&Path>) -> Result<()> {
    let path = resolve_db_path(db)?;
    let store = open_store_at(&path)?;

    println!("Database: {}", path.display());
    println!("Items: {}", store.item_count()?);
    match store.id_range()? {
        Some((min, max)) => println!("Id range: {} - {}", min, max),
        None => println!("Id range: empty"),
    }

    Ok(())
}
