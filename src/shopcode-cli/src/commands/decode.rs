//! Decode command handler

use anyhow::Result;
use std::path::Path;

use shopcode::{code_metadata, resolve_display_name, ItemCode};

use super::helpers::open_store;

/// Resolve one item code and print its display label
pub fn handle(raw: &str, db: Option<&Path>, verbose: bool) -> Result<()> {
    let store = open_store(db)?;
    let code = ItemCode::parse(raw)?;

    if !verbose {
        let meta = code_metadata(&store, &code)?;
        println!("{}", resolve_display_name(&meta, code.label()));
        return Ok(());
    }

    println!("Code: {}", code);
    println!("Label: {}", code.label());
    println!("Id: {} (base-62 {})", code.id()?, code.encoded_id());

    let meta = code_metadata(&store, &code)?;
    println!("\nMetadata:");
    for line in meta.source().lines() {
        println!("  {}", line);
    }

    println!("\nDisplay name: {}", resolve_display_name(&meta, code.label()));

    Ok(())
}
