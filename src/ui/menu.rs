//! Menu layout and dispatch. Both menus are fixed tables of tagged entries;
//! picking an operation resolves to a plain handler function through
//! [`handler_for`].

use anyhow::{anyhow, Result};

use crate::models::EntityKind;

use super::console::Console;
use super::handlers::{books, categories, reviews, Handler};

/// Entries of the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Manage(EntityKind),
    Exit,
}

pub const MAIN_MENU: [MainChoice; 4] = [
    MainChoice::Manage(EntityKind::Book),
    MainChoice::Manage(EntityKind::Category),
    MainChoice::Manage(EntityKind::Review),
    MainChoice::Exit,
];

impl MainChoice {
    /// Text shown next to the option number.
    pub fn label(self) -> String {
        match self {
            MainChoice::Manage(kind) => format!("Manage {}", kind.plural_title()),
            MainChoice::Exit => "Exit".to_string(),
        }
    }
}

/// Operations offered for every entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    Update,
    Delete,
}

/// Entries of an entity menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityChoice {
    Run(Operation),
    Return,
}

pub const ENTITY_MENU: [EntityChoice; 5] = [
    EntityChoice::Run(Operation::List),
    EntityChoice::Run(Operation::Add),
    EntityChoice::Run(Operation::Update),
    EntityChoice::Run(Operation::Delete),
    EntityChoice::Return,
];

impl EntityChoice {
    /// Operation labels name the entity, e.g. "Add a new book".
    pub fn label(self, kind: EntityKind) -> String {
        match self {
            EntityChoice::Run(Operation::List) => format!("List all {}", kind.plural()),
            EntityChoice::Run(Operation::Add) => format!("Add a new {kind}"),
            EntityChoice::Run(Operation::Update) => format!("Update a {kind}"),
            EntityChoice::Run(Operation::Delete) => format!("Delete a {kind}"),
            EntityChoice::Return => "Return to main menu".to_string(),
        }
    }
}

/// Resolve an entity/operation pair to its handler.
pub fn handler_for(kind: EntityKind, operation: Operation) -> Handler {
    match (kind, operation) {
        (EntityKind::Book, Operation::List) => books::list_books,
        (EntityKind::Book, Operation::Add) => books::add_book,
        (EntityKind::Book, Operation::Update) => books::update_book,
        (EntityKind::Book, Operation::Delete) => books::delete_book,
        (EntityKind::Category, Operation::List) => categories::list_categories,
        (EntityKind::Category, Operation::Add) => categories::add_category,
        (EntityKind::Category, Operation::Update) => categories::update_category,
        (EntityKind::Category, Operation::Delete) => categories::delete_category,
        (EntityKind::Review, Operation::List) => reviews::list_reviews,
        (EntityKind::Review, Operation::Add) => reviews::add_review,
        (EntityKind::Review, Operation::Update) => reviews::update_review,
        (EntityKind::Review, Operation::Delete) => reviews::delete_review,
    }
}

/// Print a numbered menu and return the picked entry. Only the listed
/// positions are accepted.
pub fn prompt_menu<T: Copy>(
    console: &mut dyn Console,
    title: &str,
    entries: &[T],
    label: impl Fn(T) -> String,
) -> Result<T> {
    console.line("")?;
    console.heading(title)?;
    for (index, entry) in entries.iter().enumerate() {
        console.line(&format!("  {}. {}", index + 1, label(*entry)))?;
    }

    let picked = console.choose("Select an option", 1..=entries.len() as i64, None)?;
    let index = picked.saturating_sub(1) as usize;
    entries
        .get(index)
        .copied()
        .ok_or_else(|| anyhow!("menu selection {picked} is out of range"))
}
