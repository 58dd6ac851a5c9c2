//! Category rows. Names are unique, enforced by the `UNIQUE` column
//! constraint rather than a lookup before insert.

use rusqlite::{params, Connection, Row};

use crate::models::{Category, EntityKind, NewCategory};

use super::record::Record;

impl Record for Category {
    type Draft = NewCategory;

    const KIND: EntityKind = EntityKind::Category;
    const SELECT_ALL: &'static str = "SELECT id, name FROM categories ORDER BY id";
    const SELECT_BY_ID: &'static str = "SELECT id, name FROM categories WHERE id = ?1";
    // Books and their reviews go with it through ON DELETE CASCADE.
    const DELETE: &'static str = "DELETE FROM categories WHERE id = ?1";
    const COUNT: &'static str = "SELECT COUNT(*) FROM categories";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    /// A duplicate name fails here with a constraint violation.
    fn insert(conn: &Connection, draft: &NewCategory) -> rusqlite::Result<Self> {
        conn.execute(
            "INSERT INTO categories (name) VALUES (?1)",
            params![draft.name],
        )?;

        Ok(Category {
            id: conn.last_insert_rowid(),
            name: draft.name.clone(),
        })
    }

    fn update(conn: &Connection, category: &Category) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE categories SET name = ?1 WHERE id = ?2",
            params![category.name, category.id],
        )
    }
}
