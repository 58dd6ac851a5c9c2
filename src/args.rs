use std::path::PathBuf;

use clap::Parser;

/// Menu-driven manager for a local catalog of books, categories, and reviews
#[derive(Parser)]
#[command(version, about, name = "clibrary")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to ~/.clibrary/library.db
    #[arg(long)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
