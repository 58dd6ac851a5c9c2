mod common;

use clibrary::{Book, CatalogError, Category, EntityKind, NewCategory, Review, Store};
use common::{create_test_store, seed_book, seed_category, seed_review};

#[test]
fn test_schema_creation_is_idempotent() {
    let (temp_dir, store) = create_test_store();
    let path = store.path().to_path_buf();
    drop(store);

    let reopened = Store::open(&path).expect("Failed to reopen store");
    let session = reopened.session().expect("Failed to open session");
    assert_eq!(session.count::<Category>().unwrap(), 0);
    assert!(temp_dir.path().join("library.db").exists());
}

#[test]
fn test_store_creates_missing_parent_directories() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("dir").join("library.db");

    Store::open(&path).expect("Failed to open store");
    assert!(path.exists());
}

#[test]
fn test_create_and_find_category() {
    let (_temp_dir, store) = create_test_store();
    let mut session = store.session().unwrap();

    let created = seed_category(&mut session, "Fiction");
    assert!(created.id > 0);

    let found = session
        .find_by_id::<Category>(created.id)
        .expect("Failed to look up category")
        .expect("Category should exist");
    assert_eq!(found, created);
}

#[test]
fn test_find_unknown_id_returns_none() {
    let (_temp_dir, store) = create_test_store();
    let session = store.session().unwrap();

    assert!(session.find_by_id::<Book>(42).unwrap().is_none());
}

#[test]
fn test_list_returns_rows_in_id_order() {
    let (_temp_dir, store) = create_test_store();
    let mut session = store.session().unwrap();

    seed_category(&mut session, "Poetry");
    seed_category(&mut session, "Drama");
    seed_category(&mut session, "Essays");

    let names: Vec<String> = session
        .list::<Category>()
        .unwrap()
        .into_iter()
        .map(|category| category.name)
        .collect();
    assert_eq!(names, ["Poetry", "Drama", "Essays"]);
}

#[test]
fn test_duplicate_category_name_is_rejected() {
    let (_temp_dir, store) = create_test_store();
    let mut session = store.session().unwrap();

    seed_category(&mut session, "Fiction");
    let before = session.count::<Category>().unwrap();

    let err = session
        .create::<Category>(&NewCategory {
            name: "Fiction".into(),
        })
        .expect_err("Duplicate name should fail");

    assert!(err.is_constraint());
    assert!(err.to_string().contains("UNIQUE"));
    assert_eq!(session.count::<Category>().unwrap(), before);
}

#[test]
fn test_rename_to_existing_name_rolls_back() {
    let (_temp_dir, store) = create_test_store();
    let mut session = store.session().unwrap();

    seed_category(&mut session, "Fiction");
    let mut poetry = seed_category(&mut session, "Poetry");
    poetry.name = "Fiction".into();

    let err = session.update(&poetry).expect_err("Rename should fail");
    assert!(err.is_constraint());

    let stored = session.find_by_id::<Category>(poetry.id).unwrap().unwrap();
    assert_eq!(stored.name, "Poetry");
}

#[test]
fn test_deleting_category_cascades_to_books_and_reviews() {
    let (_temp_dir, store) = create_test_store();
    let mut session = store.session().unwrap();

    let fiction = seed_category(&mut session, "Fiction");
    let dune = seed_book(&mut session, "Dune", "Herbert", &fiction);
    let review = seed_review(&mut session, &dune, 5, "");

    session.delete(&fiction).expect("Failed to delete category");

    assert!(session.find_by_id::<Book>(dune.id).unwrap().is_none());
    assert!(session.find_by_id::<Review>(review.id).unwrap().is_none());
    assert_eq!(session.count::<Book>().unwrap(), 0);
    assert_eq!(session.count::<Review>().unwrap(), 0);
}

#[test]
fn test_deleting_book_keeps_category_and_other_reviews() {
    let (_temp_dir, store) = create_test_store();
    let mut session = store.session().unwrap();

    let fiction = seed_category(&mut session, "Fiction");
    let dune = seed_book(&mut session, "Dune", "Herbert", &fiction);
    let emma = seed_book(&mut session, "Emma", "Austen", &fiction);
    seed_review(&mut session, &dune, 5, "great");
    let kept = seed_review(&mut session, &emma, 4, "witty");

    session.delete(&dune).expect("Failed to delete book");

    assert!(session.find_by_id::<Category>(fiction.id).unwrap().is_some());
    let reviews = session.list::<Review>().unwrap();
    assert_eq!(reviews, vec![kept]);
}

#[test]
fn test_update_and_delete_unknown_rows_report_not_found() {
    let (_temp_dir, store) = create_test_store();
    let mut session = store.session().unwrap();

    let ghost = Category {
        id: 99,
        name: "Ghost".into(),
    };

    let err = session.update(&ghost).expect_err("Update should fail");
    assert!(matches!(
        err,
        CatalogError::NotFound {
            kind: EntityKind::Category,
            id: 99
        }
    ));

    let err = session.delete(&ghost).expect_err("Delete should fail");
    assert!(matches!(err, CatalogError::NotFound { id: 99, .. }));
}

#[test]
fn test_update_review_keeps_book_reference() {
    let (_temp_dir, store) = create_test_store();
    let mut session = store.session().unwrap();

    let fiction = seed_category(&mut session, "Fiction");
    let dune = seed_book(&mut session, "Dune", "Herbert", &fiction);
    let emma = seed_book(&mut session, "Emma", "Austen", &fiction);
    let mut review = seed_review(&mut session, &dune, 3, "ok");

    review.rating = 4;
    review.comment = Some("better on reread".into());
    review.book_id = Some(emma.id);
    session.update(&review).expect("Failed to update review");

    let stored = session.find_by_id::<Review>(review.id).unwrap().unwrap();
    assert_eq!(stored.rating, 4);
    assert_eq!(stored.comment.as_deref(), Some("better on reread"));
    assert_eq!(stored.book_id, Some(dune.id));
}

#[test]
fn test_books_in_category() {
    let (_temp_dir, store) = create_test_store();
    let mut session = store.session().unwrap();

    let fiction = seed_category(&mut session, "Fiction");
    let poetry = seed_category(&mut session, "Poetry");
    let dune = seed_book(&mut session, "Dune", "Herbert", &fiction);
    seed_book(&mut session, "Odes", "Keats", &poetry);

    assert_eq!(session.books_in_category(fiction.id).unwrap(), vec![dune]);
    assert_eq!(session.count_books_in_category(poetry.id).unwrap(), 1);
    assert_eq!(session.count_books_in_category(999).unwrap(), 0);
}

#[test]
fn test_separate_sessions_see_committed_writes() {
    let (_temp_dir, store) = create_test_store();

    let mut first = store.session().unwrap();
    let fiction = seed_category(&mut first, "Fiction");
    first.close().expect("Failed to close session");

    let second = store.session().unwrap();
    let found = second.find_by_id::<Category>(fiction.id).unwrap();
    assert_eq!(found, Some(fiction));
}
