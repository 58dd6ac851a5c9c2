use anyhow::Result;

use crate::db::Session;
use crate::models::{Category, NewCategory};
use crate::ui::console::{Console, StatusKind};
use crate::ui::tables::TableView;

use super::{locate, write_failed, Outcome, Target};

/// Show every category with the number of books filed under it.
pub fn list_categories(session: &mut Session, console: &mut dyn Console) -> Result<Outcome> {
    let categories: Vec<Category> = session.list()?;

    if categories.is_empty() {
        console.status(StatusKind::Warning, "No categories found.")?;
        return Ok(Outcome::NoRecords);
    }

    let mut table = TableView::new("Book Categories", &["ID", "Name", "Book Count"]);
    for category in &categories {
        let book_count = session.count_books_in_category(category.id)?;
        table.push_row([
            category.id.to_string(),
            category.name.clone(),
            book_count.to_string(),
        ]);
    }

    console.table(&table)?;
    Ok(Outcome::Listed(categories.len()))
}

/// Name uniqueness is left to the database; a duplicate surfaces as a
/// constraint error from the insert.
pub fn add_category(session: &mut Session, console: &mut dyn Console) -> Result<Outcome> {
    console.heading("Add a New Category")?;

    let name = console.text("Enter category name", None)?;
    match session.create::<Category>(&NewCategory { name }) {
        Ok(category) => {
            console.status(
                StatusKind::Success,
                &format!("Category '{}' added successfully!", category.name),
            )?;
            Ok(Outcome::Created(category.id))
        }
        Err(err) => write_failed(console, "adding category", err),
    }
}

/// Rename a category. An empty answer keeps the current name, and renaming
/// onto an existing name is rejected by the database.
pub fn update_category(session: &mut Session, console: &mut dyn Console) -> Result<Outcome> {
    let mut category = match locate::<Category>(session, console, list_categories, "update")? {
        Target::Found(category) => category,
        Target::Abort(outcome) => return Ok(outcome),
    };

    console.line(&format!("Updating category: {}", category.name))?;
    category.name = console.text("Enter new name", Some(category.name.as_str()))?;

    match session.update(&category) {
        Ok(()) => {
            console.status(StatusKind::Success, "Category updated successfully!")?;
            Ok(Outcome::Updated(category.id))
        }
        Err(err) => write_failed(console, "updating category", err),
    }
}

/// Delete a category after confirmation. Its books, and their reviews, are
/// removed with it, so the operator is warned when any books are filed here.
pub fn delete_category(session: &mut Session, console: &mut dyn Console) -> Result<Outcome> {
    let category = match locate::<Category>(session, console, list_categories, "delete")? {
        Target::Found(category) => category,
        Target::Abort(outcome) => return Ok(outcome),
    };

    let books = session.books_in_category(category.id)?;
    if !books.is_empty() {
        console.status(
            StatusKind::Warning,
            &format!("Warning: This category has {} books.", books.len()),
        )?;
    }

    if !console.confirm(&format!(
        "Are you sure you want to delete '{}'?",
        category.name
    ))? {
        console.status(StatusKind::Info, "Deletion cancelled.")?;
        return Ok(Outcome::Cancelled);
    }

    match session.delete(&category) {
        Ok(()) => {
            console.status(
                StatusKind::Success,
                &format!("Category '{}' deleted successfully!", category.name),
            )?;
            Ok(Outcome::Deleted(category.id))
        }
        Err(err) => write_failed(console, "deleting category", err),
    }
}
