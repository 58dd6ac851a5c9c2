use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use log::{debug, info};
use rusqlite::Connection;

use crate::error::{CatalogError, DatabaseResultExt, Result};

use super::Session;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".clibrary";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "library.db";

const CREATE_CATEGORIES_SQL: &str = "CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
)";

const CREATE_BOOKS_SQL: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    category_id INTEGER,
    FOREIGN KEY(category_id) REFERENCES categories(id) ON DELETE CASCADE
)";

const CREATE_REVIEWS_SQL: &str = "CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    rating INTEGER NOT NULL,
    comment TEXT,
    book_id INTEGER,
    FOREIGN KEY(book_id) REFERENCES books(id) ON DELETE CASCADE
)";

/// Process-lifetime handle on the catalog database. It owns the connection
/// used to bootstrap the schema and hands out one [`Session`] per menu visit.
pub struct Store {
    path: PathBuf,
    _conn: Connection,
}

impl Store {
    /// Make sure the database file exists, create any missing tables, and
    /// keep the bootstrap connection alive for the rest of the process.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| CatalogError::FileSystem {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = open_connection(&path)?;
        ensure_schema(&conn)?;
        info!("catalog store ready at {}", path.display());

        Ok(Self { path, _conn: conn })
    }

    /// Open the store at the default location under the user's home.
    pub fn open_default() -> Result<Self> {
        Self::open(default_db_path()?)
    }

    /// Start a session backed by its own connection. Writes made through it
    /// are visible to later reads on the same session.
    pub fn session(&self) -> Result<Session> {
        debug!("opening session on {}", self.path.display());
        Ok(Session::new(open_connection(&self.path)?))
    }

    /// Location of the database file this store opened.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolve the absolute path to the SQLite database inside the user's home.
pub fn default_db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or(CatalogError::DataDirectory)?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

/// Open a connection with foreign keys enforced. SQLite keeps that pragma per
/// connection, and the cascade rules depend on it.
fn open_connection(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path).db_context("failed to open SQLite database")?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .db_context("failed to enable foreign keys")?;
    Ok(conn)
}

fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_CATEGORIES_SQL, [])
        .db_context("failed to create categories table")?;
    conn.execute(CREATE_BOOKS_SQL, [])
        .db_context("failed to create books table")?;
    conn.execute(CREATE_REVIEWS_SQL, [])
        .db_context("failed to create reviews table")?;
    Ok(())
}
