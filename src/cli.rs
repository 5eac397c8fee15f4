//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Search the Open Library catalog from your terminal.
#[derive(Debug, Parser)]
#[command(name = "bookfinder", version, about)]
pub struct Cli {
    /// Run a search for this title immediately on startup.
    #[arg(short, long, value_name = "TITLE")]
    pub query: Option<String>,

    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
