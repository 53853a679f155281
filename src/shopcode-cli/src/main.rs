mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { code, db, verbose } => {
            commands::decode::handle(&code, db.as_deref(), verbose)?;
        }

        Commands::Process { input, db, dry_run } => {
            commands::process::handle(&input, db.as_deref(), dry_run)?;
        }

        Commands::Id { encoded } => {
            commands::codec::id(&encoded)?;
        }

        Commands::Encode { id } => {
            commands::codec::encode(&id)?;
        }

        Commands::Inspect { id, db } => {
            commands::items::inspect(id, db.as_deref())?;
        }

        Commands::Stats { db } => {
            commands::items::stats(db.as_deref())?;
        }

        Commands::Configure { db, show } => {
            commands::configure::handle(db, show)?;
        }
    }

    Ok(())
}
