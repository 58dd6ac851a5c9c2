//! Book rows. Every book belongs to a category; deleting the category or the
//! book removes dependent rows through the schema's cascades.

use rusqlite::{params, Connection, Row};

use crate::models::{Book, EntityKind, NewBook};

use super::record::Record;

/// Books filed under one category, oldest first. Used for the warning shown
/// before a category is deleted.
pub(crate) const SELECT_BY_CATEGORY: &str = "SELECT id, title, author, category_id
     FROM books
     WHERE category_id = ?1
     ORDER BY id";

/// Book count for one category, shown in the category listing.
pub(crate) const COUNT_BY_CATEGORY: &str = "SELECT COUNT(*) FROM books WHERE category_id = ?1";

impl Record for Book {
    type Draft = NewBook;

    const KIND: EntityKind = EntityKind::Book;
    const SELECT_ALL: &'static str = "SELECT id, title, author, category_id FROM books ORDER BY id";
    const SELECT_BY_ID: &'static str =
        "SELECT id, title, author, category_id FROM books WHERE id = ?1";
    const DELETE: &'static str = "DELETE FROM books WHERE id = ?1";
    const COUNT: &'static str = "SELECT COUNT(*) FROM books";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Book {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            category_id: row.get(3)?,
        })
    }

    /// The draft is echoed back with the new row id, so callers can report the
    /// title without reading the row again.
    fn insert(conn: &Connection, draft: &NewBook) -> rusqlite::Result<Self> {
        conn.execute(
            "INSERT INTO books (title, author, category_id) VALUES (?1, ?2, ?3)",
            params![draft.title, draft.author, draft.category_id],
        )?;

        Ok(Book {
            id: conn.last_insert_rowid(),
            title: draft.title.clone(),
            author: draft.author.clone(),
            category_id: draft.category_id,
        })
    }

    /// Title, author and category are all writable; the id is the key.
    fn update(conn: &Connection, book: &Book) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE books SET title = ?1, author = ?2, category_id = ?3 WHERE id = ?4",
            params![book.title, book.author, book.category_id, book.id],
        )
    }
}
