//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shopcode")]
#[command(about = "ChestShop item code resolver", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one item code to its display label
    #[command(visible_alias = "d")]
    Decode {
        /// Item code of the form label#id (e.g. "Apple#2NV")
        code: String,

        /// Path to the items database (can also set SHOPCODE_DB env var)
        #[arg(long, env = "SHOPCODE_DB")]
        db: Option<PathBuf>,

        /// Show the decoded id and metadata YAML as well
        #[arg(short, long)]
        verbose: bool,
    },

    /// Resolve every item code in a listing file, in place
    #[command(visible_alias = "p")]
    Process {
        /// Path to the listing file
        input: PathBuf,

        /// Path to the items database (can also set SHOPCODE_DB env var)
        #[arg(long, env = "SHOPCODE_DB")]
        db: Option<PathBuf>,

        /// Print the result instead of rewriting the file
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Decode a bare base-62 string to its integer id
    Id {
        /// Base-62 encoded id (e.g. "2NV")
        encoded: String,
    },

    /// Encode an integer id to its base-62 form
    Encode {
        /// Integer id (e.g. 10783)
        id: String,
    },

    /// Look up a record id and print its metadata YAML
    #[command(visible_alias = "i")]
    Inspect {
        /// Record id
        id: i64,

        /// Path to the items database (can also set SHOPCODE_DB env var)
        #[arg(long, env = "SHOPCODE_DB")]
        db: Option<PathBuf>,
    },

    /// Show record count and id range of the database
    Stats {
        /// Path to the items database (can also set SHOPCODE_DB env var)
        #[arg(long, env = "SHOPCODE_DB")]
        db: Option<PathBuf>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the default items database path
        #[arg(long)]
        db: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
