//! Error types surfaced by the persistence gateway.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

use crate::models::EntityKind;

/// Everything that can go wrong while reading or writing catalog records.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Lookup by id yielded nothing
    #[error("{} with ID {id} not found", .kind.title())]
    NotFound { kind: EntityKind, id: i64 },
    /// Unique or NOT NULL violation reported by SQLite at commit time
    #[error("{message}")]
    Constraint { message: String },
    /// An add operation needs records that do not exist yet
    #[error("cannot add a {kind} before any {} exist", .needs.plural())]
    PrerequisiteMissing { kind: EntityKind, needs: EntityKind },
    /// Any other database failure
    #[error("{message}: {source}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system errors while preparing the database location
    #[error("file system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The default database location could not be resolved
    #[error("could not locate home directory")]
    DataDirectory,
}

impl CatalogError {
    /// Classify a rusqlite error raised while running `action`. Constraint
    /// failures keep SQLite's own message so the operator sees which rule
    /// was broken.
    pub fn from_storage(action: &str, err: rusqlite::Error) -> Self {
        if matches!(err.sqlite_error_code(), Some(ErrorCode::ConstraintViolation)) {
            CatalogError::Constraint {
                message: err.to_string(),
            }
        } else {
            CatalogError::Storage {
                message: action.to_string(),
                source: err,
            }
        }
    }

    /// True for unique/NOT NULL/foreign key violations.
    pub fn is_constraint(&self) -> bool {
        matches!(self, CatalogError::Constraint { .. })
    }
}

/// Extension trait mapping rusqlite results into `CatalogError`.
pub trait DatabaseResultExt<T> {
    fn db_context(self, action: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, action: &str) -> Result<T> {
        self.map_err(|err| CatalogError::from_storage(action, err))
    }
}

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
