//! Core library surface for the CLIbrary catalog manager.
//!
//! `db` is the only layer that talks to SQLite, `models` holds the plain
//! record types, and `ui` drives the menus and prompts on top of both.
pub mod db;
pub mod error;
pub mod models;
pub mod ui;

/// Persistence entry points used by `main.rs` and the integration tests.
pub use db::{default_db_path, Record, Session, Store};

pub use error::CatalogError;

pub use models::{Book, Category, EntityKind, NewBook, NewCategory, NewReview, Review};

/// The interactive controller and the console it runs on.
pub use ui::{App, Console, Outcome, TerminalConsole};
