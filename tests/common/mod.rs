#![allow(dead_code)]

use std::io::Cursor;

use clibrary::{
    Book, Category, NewBook, NewCategory, NewReview, Review, Session, Store, TerminalConsole,
};
use tempfile::TempDir;

/// Console fed from a fixed script and writing into memory.
pub type ScriptedConsole = TerminalConsole<Cursor<Vec<u8>>, Vec<u8>>;

/// Helper function to create a store backed by a throwaway database file
pub fn create_test_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = Store::open(temp_dir.path().join("library.db")).expect("Failed to open store");
    (temp_dir, store)
}

/// One answer per line, in the order the prompts ask for them.
pub fn scripted(answers: &[&str]) -> ScriptedConsole {
    let mut script = answers.join("\n");
    script.push('\n');
    TerminalConsole::new(Cursor::new(script.into_bytes()), Vec::new(), false)
}

pub fn transcript(console: &ScriptedConsole) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}

pub fn seed_category(session: &mut Session, name: &str) -> Category {
    session
        .create::<Category>(&NewCategory { name: name.into() })
        .expect("Failed to create category")
}

pub fn seed_book(session: &mut Session, title: &str, author: &str, category: &Category) -> Book {
    session
        .create::<Book>(&NewBook {
            title: title.into(),
            author: author.into(),
            category_id: Some(category.id),
        })
        .expect("Failed to create book")
}

pub fn seed_review(session: &mut Session, book: &Book, rating: i64, comment: &str) -> Review {
    session
        .create::<Review>(&NewReview {
            rating,
            comment: Some(comment.into()),
            book_id: book.id,
        })
        .expect("Failed to create review")
}
