use anyhow::{anyhow, Result};

use crate::db::Session;
use crate::error::CatalogError;
use crate::models::{Book, EntityKind, NewReview, Review, RATING_CHOICES, UNKNOWN_BOOK};
use crate::ui::console::{Console, StatusKind};
use crate::ui::helpers::{select_index, show_numbered};
use crate::ui::tables::TableView;

use super::{locate, write_failed, Outcome, Target};

/// Show every review next to the title of the book it is for. A missing
/// comment is shown as an empty cell.
pub fn list_reviews(session: &mut Session, console: &mut dyn Console) -> Result<Outcome> {
    let reviews: Vec<Review> = session.list()?;

    if reviews.is_empty() {
        console.status(StatusKind::Warning, "No reviews found.")?;
        return Ok(Outcome::NoRecords);
    }

    let mut table = TableView::new("Book Reviews", &["ID", "Book", "Rating", "Comment"]);
    for review in &reviews {
        table.push_row([
            review.id.to_string(),
            book_title(session, review)?,
            review.rating.to_string(),
            review.comment_text().to_string(),
        ]);
    }

    console.table(&table)?;
    Ok(Outcome::Listed(reviews.len()))
}

/// Pick a book, then ask for a rating and an optional comment. The rating
/// prompt only accepts values in [`RATING_CHOICES`], so an invalid rating never
/// reaches the database.
pub fn add_review(session: &mut Session, console: &mut dyn Console) -> Result<Outcome> {
    console.heading("Add a New Review")?;

    let books: Vec<Book> = session.list()?;
    if books.is_empty() {
        console.status(
            StatusKind::Warning,
            "No books available. Please add a book first.",
        )?;
        return Ok(Outcome::Failed(CatalogError::PrerequisiteMissing {
            kind: EntityKind::Review,
            needs: EntityKind::Book,
        }));
    }

    let choices: Vec<String> = books.iter().map(Book::display_title).collect();
    show_numbered(console, "Available Books:", &choices)?;
    let index = select_index(console, "Select book number", books.len(), None)?;
    let book = books
        .get(index)
        .ok_or_else(|| anyhow!("book selection {} is out of range", index + 1))?;

    let rating = console.choose("Enter rating (1-5)", RATING_CHOICES, None)?;
    let comment = console.text("Enter comment (optional)", Some(""))?;

    let draft = NewReview {
        rating,
        comment: Some(comment),
        book_id: book.id,
    };
    match session.create::<Review>(&draft) {
        Ok(review) => {
            console.status(
                StatusKind::Success,
                &format!("Review for '{}' added successfully!", book.title),
            )?;
            Ok(Outcome::Created(review.id))
        }
        Err(err) => write_failed(console, "adding review", err),
    }
}

/// Change rating and comment. The reviewed book stays fixed.
pub fn update_review(session: &mut Session, console: &mut dyn Console) -> Result<Outcome> {
    let mut review = match locate::<Review>(session, console, list_reviews, "update")? {
        Target::Found(review) => review,
        Target::Abort(outcome) => return Ok(outcome),
    };

    let title = book_title(session, &review)?;
    console.line(&format!("Updating review for: {title}"))?;

    let rating = console.choose("Enter new rating (1-5)", RATING_CHOICES, Some(review.rating))?;
    let comment = console.text("Enter new comment", Some(review.comment_text()))?;

    review.rating = rating;
    if comment != review.comment_text() {
        review.comment = Some(comment);
    }

    match session.update(&review) {
        Ok(()) => {
            console.status(StatusKind::Success, "Review updated successfully!")?;
            Ok(Outcome::Updated(review.id))
        }
        Err(err) => write_failed(console, "updating review", err),
    }
}

/// Delete a review after confirmation. The prompt names the reviewed book.
pub fn delete_review(session: &mut Session, console: &mut dyn Console) -> Result<Outcome> {
    let review = match locate::<Review>(session, console, list_reviews, "delete")? {
        Target::Found(review) => review,
        Target::Abort(outcome) => return Ok(outcome),
    };

    let title = book_title(session, &review)?;
    if !console.confirm(&format!(
        "Are you sure you want to delete review for '{title}'?"
    ))? {
        console.status(StatusKind::Info, "Deletion cancelled.")?;
        return Ok(Outcome::Cancelled);
    }

    match session.delete(&review) {
        Ok(()) => {
            console.status(StatusKind::Success, "Review deleted successfully!")?;
            Ok(Outcome::Deleted(review.id))
        }
        Err(err) => write_failed(console, "deleting review", err),
    }
}

/// Title of the reviewed book, or a placeholder when it no longer exists.
fn book_title(session: &Session, review: &Review) -> Result<String> {
    let book = match review.book_id {
        Some(id) => session.find_by_id::<Book>(id)?,
        None => None,
    };
    Ok(book.map_or_else(|| UNKNOWN_BOOK.to_string(), |book| book.title))
}
