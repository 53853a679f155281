//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up shopcode CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `db` - Optional database path to set as default
/// * `show` - If true, show current configuration
pub fn handle(db: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config)?;
        return Ok(());
    }

    if let Some(path) = db {
        set_db_path(&mut config, path)?;
    } else {
        show_usage();
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) -> Result<()> {
    if let Some(path) = config.get_db_path() {
        println!("Items database: {}", path.display());
    } else {
        println!("No items database configured");
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

/// Set the database path in configuration
fn set_db_path(config: &mut Config, path: PathBuf) -> Result<()> {
    config.set_db_path(path.clone());
    config.save()?;

    println!("Items database configured: {}", path.display());
    if let Ok(config_path) = Config::config_path() {
        println!("Config saved to: {}", config_path.display());
    }

    Ok(())
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: shopcode configure --db PATH/TO/items.db");
    println!("   or: shopcode configure --show");
    println!();
    println!("Note: the database is the items.db written by the shop plugin.");
    println!("      Item codes resolve against the `items` table inside it.");
}
