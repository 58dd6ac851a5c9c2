use rusqlite::{Connection, Row};

use crate::models::EntityKind;

/// Capability contract every stored entity implements. The session's generic
/// CRUD methods are written once against this trait; each entity module only
/// supplies its SQL and row mapping.
pub trait Record: Sized {
    /// Field values accepted by `insert` before an id is assigned.
    type Draft;

    /// Which entity this is, for messages and log lines.
    const KIND: EntityKind;
    /// Full-table read, ordered by id.
    const SELECT_ALL: &'static str;
    /// Single-row read keyed by `?1`.
    const SELECT_BY_ID: &'static str;
    /// Single-row delete keyed by `?1`.
    const DELETE: &'static str;
    /// Row count for the whole table.
    const COUNT: &'static str;

    /// Primary key of a stored record.
    fn id(&self) -> i64;

    /// Map a row selected by `SELECT_ALL` or `SELECT_BY_ID`. Both queries
    /// return columns in the same order.
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Insert a row and return the hydrated record.
    fn insert(conn: &Connection, draft: &Self::Draft) -> rusqlite::Result<Self>;

    /// Write every mutable column back, returning the number of rows touched.
    fn update(conn: &Connection, record: &Self) -> rusqlite::Result<usize>;
}
