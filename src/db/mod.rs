//! Persistence gateway over the embedded SQLite catalog. The only module that
//! issues SQL. Every mutation runs inside its own transaction that commits on
//! success and rolls back on any failure, so callers never see partial writes.

mod books;
mod categories;
mod connection;
mod record;
mod reviews;

use log::{debug, info, warn};
use rusqlite::{Connection, OptionalExtension};

use crate::error::{CatalogError, DatabaseResultExt, Result};
use crate::models::Book;

pub use connection::{default_db_path, Store};
pub use record::Record;

/// A unit of work scoped to one menu visit. Reads and writes share a single
/// connection, so each operation observes the writes of the ones before it.
pub struct Session {
    conn: Connection,
}

impl Session {
    pub(crate) fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Retrieve every row of `R` in id order.
    pub fn list<R: Record>(&self) -> Result<Vec<R>> {
        debug!("listing {}", R::KIND.plural());
        let action = format!("failed to load {}", R::KIND.plural());
        let mut stmt = self.conn.prepare(R::SELECT_ALL).db_context(&action)?;

        let records = stmt
            .query_map([], R::from_row)
            .db_context(&action)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context(&action)?;

        Ok(records)
    }

    /// Look up a single row, returning `None` when the id is unknown.
    pub fn find_by_id<R: Record>(&self, id: i64) -> Result<Option<R>> {
        debug!("looking up {} {id}", R::KIND);
        self.conn
            .query_row(R::SELECT_BY_ID, [id], R::from_row)
            .optional()
            .db_context(&format!("failed to look up {}", R::KIND))
    }

    /// Number of rows currently stored for `R`.
    pub fn count<R: Record>(&self) -> Result<usize> {
        self.conn
            .query_row(R::COUNT, [], |row| row.get::<_, i64>(0))
            .map(|count| count as usize)
            .db_context(&format!("failed to count {}", R::KIND.plural()))
    }

    /// Books filed under one category, in id order.
    pub fn books_in_category(&self, category_id: i64) -> Result<Vec<Book>> {
        let action = "failed to load books for category";
        let mut stmt = self
            .conn
            .prepare(books::SELECT_BY_CATEGORY)
            .db_context(action)?;

        let books = stmt
            .query_map([category_id], <Book as Record>::from_row)
            .db_context(action)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context(action)?;

        Ok(books)
    }

    /// Same filter as [`Session::books_in_category`], counted in SQL so the
    /// listing does not load every book per row.
    pub fn count_books_in_category(&self, category_id: i64) -> Result<usize> {
        self.conn
            .query_row(books::COUNT_BY_CATEGORY, [category_id], |row| {
                row.get::<_, i64>(0)
            })
            .map(|count| count as usize)
            .db_context("failed to count books for category")
    }

    /// Insert a new row and return it with its assigned id.
    pub fn create<R: Record>(&mut self, draft: &R::Draft) -> Result<R> {
        let action = format!("failed to insert {}", R::KIND);
        let record = self.write(&action, |conn| R::insert(conn, draft))?;
        info!("created {} {}", R::KIND, record.id());
        Ok(record)
    }

    /// Persist the in-memory state of an existing row.
    pub fn update<R: Record>(&mut self, record: &R) -> Result<()> {
        let action = format!("failed to update {}", R::KIND);
        let updated = self.write(&action, |conn| R::update(conn, record))?;

        if updated == 0 {
            Err(CatalogError::NotFound {
                kind: R::KIND,
                id: record.id(),
            })
        } else {
            info!("updated {} {}", R::KIND, record.id());
            Ok(())
        }
    }

    /// Remove a row. Dependents are removed by the schema's cascade rules in
    /// the same statement.
    pub fn delete<R: Record>(&mut self, record: &R) -> Result<()> {
        let action = format!("failed to delete {}", R::KIND);
        let deleted = self.write(&action, |conn| conn.execute(R::DELETE, [record.id()]))?;

        if deleted == 0 {
            Err(CatalogError::NotFound {
                kind: R::KIND,
                id: record.id(),
            })
        } else {
            info!("deleted {} {}", R::KIND, record.id());
            Ok(())
        }
    }

    /// Release the underlying connection.
    pub fn close(self) -> Result<()> {
        debug!("closing session");
        self.conn
            .close()
            .map_err(|(_, err)| CatalogError::from_storage("failed to close session", err))
    }

    /// Run `op` inside a transaction, committing on success and rolling back
    /// on failure.
    fn write<T>(
        &mut self,
        action: &str,
        op: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> Result<T> {
        let tx = self
            .conn
            .transaction()
            .db_context("failed to begin transaction")?;

        match op(&tx) {
            Ok(value) => {
                tx.commit().db_context("failed to commit transaction")?;
                Ok(value)
            }
            Err(err) => {
                warn!("{action}, rolling back: {err}");
                if let Err(rollback_err) = tx.rollback() {
                    warn!("rollback failed: {rollback_err}");
                }
                Err(CatalogError::from_storage(action, err))
            }
        }
    }
}
