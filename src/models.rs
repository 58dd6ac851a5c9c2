//! Domain models that mirror the SQLite schema and get passed between the
//! gateway and the menu handlers. They stay plain data holders; every
//! relationship is an id that has to be resolved with an explicit query.

use std::fmt;
use std::ops::RangeInclusive;

/// Ratings a reviewer may pick from. The prompt layer only accepts values in
/// this range, so no other component re-checks it.
pub const RATING_CHOICES: RangeInclusive<i64> = 1..=5;

/// Shown in place of a category name when a book has none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Shown in place of a book title when a review points at nothing.
pub const UNKNOWN_BOOK: &str = "Unknown Book";

/// The three record types managed by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Book,
    Category,
    Review,
}

impl EntityKind {
    /// Lower-case singular noun used in prompts ("Enter the ID of the book").
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Book => "book",
            EntityKind::Category => "category",
            EntityKind::Review => "review",
        }
    }

    /// Lower-case plural noun used in menu labels ("List all books").
    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Book => "books",
            EntityKind::Category => "categories",
            EntityKind::Review => "reviews",
        }
    }

    /// Capitalized plural noun for menu titles ("Books Menu").
    pub fn plural_title(self) -> &'static str {
        match self {
            EntityKind::Book => "Books",
            EntityKind::Category => "Categories",
            EntityKind::Review => "Reviews",
        }
    }

    /// Capitalized singular noun for status lines ("Book not found!").
    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Book => "Book",
            EntityKind::Category => "Category",
            EntityKind::Review => "Review",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A catalogued book. `category_id` is `None` only for rows written outside
/// the interactive flows.
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub category_id: Option<i64>,
}

impl Book {
    /// `Title by Author`, used when offering books as choices.
    pub fn display_title(&self) -> String {
        format!("{} by {}", self.title, self.author)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A named shelf grouping books. Names are unique across the catalog.
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A rating with an optional comment attached to a book.
pub struct Review {
    pub id: i64,
    pub rating: i64,
    pub comment: Option<String>,
    /// Fixed at creation; updates never touch it.
    pub book_id: Option<i64>,
}

impl Review {
    /// Comment text, or an empty string for rows stored with `NULL`.
    pub fn comment_text(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }
}

/// Field values for a book that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub category_id: Option<i64>,
}

/// Field values for a category that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
}

/// Field values for a review that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub rating: i64,
    pub comment: Option<String>,
    pub book_id: i64,
}
