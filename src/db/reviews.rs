//! Review rows. Each review points at one book and is removed with it.

use rusqlite::{params, Connection, Row};

use crate::models::{EntityKind, NewReview, Review};

use super::record::Record;

impl Record for Review {
    type Draft = NewReview;

    const KIND: EntityKind = EntityKind::Review;
    const SELECT_ALL: &'static str =
        "SELECT id, rating, comment, book_id FROM reviews ORDER BY id";
    const SELECT_BY_ID: &'static str =
        "SELECT id, rating, comment, book_id FROM reviews WHERE id = ?1";
    const DELETE: &'static str = "DELETE FROM reviews WHERE id = ?1";
    const COUNT: &'static str = "SELECT COUNT(*) FROM reviews";

    fn id(&self) -> i64 {
        self.id
    }

    /// `comment` and `book_id` are nullable in the schema and map to `Option`.
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Review {
            id: row.get(0)?,
            rating: row.get(1)?,
            comment: row.get(2)?,
            book_id: row.get(3)?,
        })
    }

    /// New reviews always reference a book; only rows written outside the app
    /// can lack one.
    fn insert(conn: &Connection, draft: &NewReview) -> rusqlite::Result<Self> {
        conn.execute(
            "INSERT INTO reviews (rating, comment, book_id) VALUES (?1, ?2, ?3)",
            params![draft.rating, draft.comment, draft.book_id],
        )?;

        Ok(Review {
            id: conn.last_insert_rowid(),
            rating: draft.rating,
            comment: draft.comment.clone(),
            book_id: Some(draft.book_id),
        })
    }

    /// The book reference is immutable once a review exists, so only the
    /// rating and comment are written back.
    fn update(conn: &Connection, review: &Review) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE reviews SET rating = ?1, comment = ?2 WHERE id = ?3",
            params![review.rating, review.comment, review.id],
        )
    }
}
