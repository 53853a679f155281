//! Bulk listing processing

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use shopcode::process_lines;

use super::helpers::open_store;

/// Resolve every item code in `input`, rewriting the file in place.
///
/// The whole file is read and processed before anything is written, so
/// a failure partway through leaves the listing untouched. Failed lines
/// keep their original text and are reported on stderr; the run can be
/// repeated once the database is fixed.
pub fn handle(input: &Path, db: Option<&Path>, dry_run: bool) -> Result<()> {
    let store = open_store(db)?;

    let contents = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {:?}", input))?;
    let lines: Vec<&str> = contents.lines().collect();

    let outcome = process_lines(&store, &lines);

    for (line, error) in &outcome.failures {
        eprintln!("Skipping '{}': {}", line, error);
    }

    let output = outcome.lines.join("\n") + "\n";
    if dry_run {
        print!("{}", output);
        return Ok(());
    }

    fs::write(input, output)
        .with_context(|| format!("Failed to write output file: {:?}", input))?;

    println!(
        "Processed {} lines in {:?} ({} replaced, {} kept, {} errors)",
        outcome.lines.len(),
        input,
        outcome.replaced,
        outcome.kept,
        outcome.failures.len()
    );

    Ok(())
}
