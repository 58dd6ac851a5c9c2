//! List/add/update/delete handlers for each entity. Every handler runs one
//! pass through its prompt sequence and returns an [`Outcome`]; retrying is
//! left to the surrounding menu.

pub mod books;
pub mod categories;
pub mod reviews;

use anyhow::Result;

use crate::db::{Record, Session};
use crate::error::CatalogError;

use super::console::{Console, StatusKind};

/// Terminal state reached by a handler.
#[derive(Debug)]
pub enum Outcome {
    /// A table with this many rows was shown.
    Listed(usize),
    /// The table was empty, so nothing was drawn.
    NoRecords,
    Created(i64),
    Updated(i64),
    Deleted(i64),
    /// The operator declined the confirmation.
    Cancelled,
    /// Missing prerequisites, unknown id, or a rolled-back write.
    Failed(CatalogError),
}

/// Common signature of every handler, used by the menu's dispatch table.
pub type Handler = fn(&mut Session, &mut dyn Console) -> Result<Outcome>;

/// Result of the shared opening of update and delete.
enum Target<R> {
    Found(R),
    Abort(Outcome),
}

/// Show the current rows, ask which id to act on, and look it up. An empty
/// table ends the operation without a further message.
fn locate<R: Record>(
    session: &mut Session,
    console: &mut dyn Console,
    list: Handler,
    verb: &str,
) -> Result<Target<R>> {
    if let Outcome::NoRecords = list(session, console)? {
        return Ok(Target::Abort(Outcome::NoRecords));
    }

    let id = console.integer(&format!("Enter the ID of the {} to {verb}", R::KIND))?;
    match session.find_by_id::<R>(id)? {
        Some(record) => Ok(Target::Found(record)),
        None => {
            console.status(
                StatusKind::Error,
                &format!("{} not found!", R::KIND.title()),
            )?;
            Ok(Target::Abort(Outcome::Failed(CatalogError::NotFound {
                kind: R::KIND,
                id,
            })))
        }
    }
}

/// Report a failed write and turn it into an outcome. The gateway already
/// rolled the transaction back.
fn write_failed(console: &mut dyn Console, verb: &str, err: CatalogError) -> Result<Outcome> {
    console.status(StatusKind::Error, &format!("Error {verb}: {err}"))?;
    Ok(Outcome::Failed(err))
}
