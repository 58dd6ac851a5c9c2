use std::collections::HashMap;

use anyhow::{anyhow, Result};

use crate::db::Session;
use crate::error::CatalogError;
use crate::models::{Book, Category, EntityKind, NewBook, UNCATEGORIZED};
use crate::ui::console::{Console, StatusKind};
use crate::ui::helpers::{select_index, show_numbered};
use crate::ui::tables::TableView;

use super::{locate, write_failed, Outcome, Target};

/// Shown when a book would have no category to be filed under.
const NO_CATEGORIES: &str = "No categories available. Please create a category first.";

/// Show every book with its category name. Books whose category row is gone
/// are listed as uncategorized rather than hidden.
pub fn list_books(session: &mut Session, console: &mut dyn Console) -> Result<Outcome> {
    let books: Vec<Book> = session.list()?;

    if books.is_empty() {
        console.status(StatusKind::Warning, "No books found in the library.")?;
        return Ok(Outcome::NoRecords);
    }

    let category_names: HashMap<i64, String> = session
        .list::<Category>()?
        .into_iter()
        .map(|category| (category.id, category.name))
        .collect();

    let mut table = TableView::new("Books in Library", &["ID", "Title", "Author", "Category"]);
    for book in &books {
        let category = book
            .category_id
            .and_then(|id| category_names.get(&id))
            .map_or(UNCATEGORIZED, String::as_str);
        table.push_row([
            book.id.to_string(),
            book.title.clone(),
            book.author.clone(),
            category.to_string(),
        ]);
    }

    console.table(&table)?;
    Ok(Outcome::Listed(books.len()))
}

/// Pick a category, then ask for title and author. Nothing is prompted when
/// no category exists yet, since a book cannot be filed without one.
pub fn add_book(session: &mut Session, console: &mut dyn Console) -> Result<Outcome> {
    console.heading("Add a New Book")?;

    let categories: Vec<Category> = session.list()?;
    if categories.is_empty() {
        return missing_categories(console);
    }

    let category = pick_category(console, &categories, "Select category number", None)?;
    let title = console.text("Enter book title", None)?;
    let author = console.text("Enter author name", None)?;

    let draft = NewBook {
        title,
        author,
        category_id: Some(category.id),
    };
    match session.create::<Book>(&draft) {
        Ok(book) => {
            console.status(
                StatusKind::Success,
                &format!("Book '{}' added successfully!", book.title),
            )?;
            Ok(Outcome::Created(book.id))
        }
        Err(err) => write_failed(console, "adding book", err),
    }
}

/// Edit title and author, then pick the category again. The current category
/// is the default choice, so accepting every default leaves the row as is.
pub fn update_book(session: &mut Session, console: &mut dyn Console) -> Result<Outcome> {
    let mut book = match locate::<Book>(session, console, list_books, "update")? {
        Target::Found(book) => book,
        Target::Abort(outcome) => return Ok(outcome),
    };

    console.line(&format!("Updating book: {} by {}", book.title, book.author))?;
    let title = console.text("Enter new title", Some(book.title.as_str()))?;
    let author = console.text("Enter new author", Some(book.author.as_str()))?;

    let categories: Vec<Category> = session.list()?;
    if categories.is_empty() {
        return missing_categories(console);
    }
    let current = categories
        .iter()
        .position(|category| Some(category.id) == book.category_id);
    let category = pick_category(console, &categories, "Select new category number", current)?;

    book.title = title;
    book.author = author;
    book.category_id = Some(category.id);

    match session.update(&book) {
        Ok(()) => {
            console.status(StatusKind::Success, "Book updated successfully!")?;
            Ok(Outcome::Updated(book.id))
        }
        Err(err) => write_failed(console, "updating book", err),
    }
}

/// Delete a book after confirmation. Its reviews go with it.
pub fn delete_book(session: &mut Session, console: &mut dyn Console) -> Result<Outcome> {
    let book = match locate::<Book>(session, console, list_books, "delete")? {
        Target::Found(book) => book,
        Target::Abort(outcome) => return Ok(outcome),
    };

    if !console.confirm(&format!("Are you sure you want to delete '{}'?", book.title))? {
        console.status(StatusKind::Info, "Deletion cancelled.")?;
        return Ok(Outcome::Cancelled);
    }

    match session.delete(&book) {
        Ok(()) => {
            console.status(
                StatusKind::Success,
                &format!("Book '{}' deleted successfully!", book.title),
            )?;
            Ok(Outcome::Deleted(book.id))
        }
        Err(err) => write_failed(console, "deleting book", err),
    }
}

/// Warn about the missing category and report it as a failed outcome.
fn missing_categories(console: &mut dyn Console) -> Result<Outcome> {
    console.status(StatusKind::Warning, NO_CATEGORIES)?;
    Ok(Outcome::Failed(CatalogError::PrerequisiteMissing {
        kind: EntityKind::Book,
        needs: EntityKind::Category,
    }))
}

/// Number the categories and ask for one. `current` is the zero-based index
/// offered as the default.
fn pick_category<'a>(
    console: &mut dyn Console,
    categories: &'a [Category],
    label: &str,
    current: Option<usize>,
) -> Result<&'a Category> {
    let names: Vec<String> = categories.iter().map(|category| category.name.clone()).collect();
    show_numbered(console, "Available Categories:", &names)?;
    let index = select_index(console, label, categories.len(), current)?;
    categories
        .get(index)
        .ok_or_else(|| anyhow!("category selection {} is out of range", index + 1))
}
