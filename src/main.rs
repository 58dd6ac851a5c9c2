//! Binary entry point: open the catalog database, then hand the terminal to
//! the menu controller until the operator exits.

mod args;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use clibrary::{App, Store, TerminalConsole};
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
    } = Args::parse();

    let store = match database_file {
        Some(path) => Store::open(path),
        None => Store::open_default(),
    }
    .context("failed to open catalog database")?;

    info!("CLIbrary started with {}", store.path().display());

    let mut app = App::new(store, TerminalConsole::stdio(!no_color));
    app.run()
}
