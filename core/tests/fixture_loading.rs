//! Loader and provider properties checked against the shipped `test-data/`.
//!
//! Each loader result is compared with the raw JSON of the same file, so a
//! fixture edit that the typed records silently drop shows up here.

use bookstore_core::fixtures::{
    BULK_TEST_DATA, INVALID_AUTHORS, INVALID_BOOKS, TEST_IDS, VALIDATION_DATA, VALID_AUTHORS, VALID_BOOKS,
};
use bookstore_core::providers;
use bookstore_core::FixtureStore;

fn raw(store: &FixtureStore, file: &str) -> serde_json::Value {
    let text = std::fs::read_to_string(store.path_of(file)).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn shipped_fixtures_are_healthy() {
    let problems = FixtureStore::default().diagnose();
    assert!(problems.is_empty(), "broken fixtures: {problems:?}");
}

#[test]
fn valid_books_match_source_length_and_order() {
    let store = FixtureStore::default();
    let source = raw(&store, VALID_BOOKS);
    let source = source.as_array().unwrap();

    let books = store.valid_books();

    assert_eq!(books.len(), source.len());
    for (book, json) in books.iter().zip(source) {
        assert_eq!(book.title, json["title"]);
        assert_eq!(i64::from(book.page_count), json["pageCount"].as_i64().unwrap());
    }
}

#[test]
fn valid_authors_match_source_length_and_order() {
    let store = FixtureStore::default();
    let source = raw(&store, VALID_AUTHORS);
    let source = source.as_array().unwrap();

    let authors = store.valid_authors();

    assert_eq!(authors.len(), source.len());
    for (author, json) in authors.iter().zip(source) {
        assert_eq!(author.first_name, json["firstName"]);
        assert_eq!(author.last_name, json["lastName"]);
    }
}

#[test]
fn invalid_fixtures_keep_data_and_error_apart() {
    let store = FixtureStore::default();

    let source = raw(&store, INVALID_BOOKS);
    let books = providers::invalid_book_data(&store);
    assert_eq!(books.len(), source.as_array().unwrap().len());
    for ((book, error), json) in books.iter().zip(source.as_array().unwrap()) {
        assert_eq!(book.title, json["testData"]["title"]);
        assert_eq!(error, &json["expectedError"]);
    }

    let source = raw(&store, INVALID_AUTHORS);
    let authors = providers::invalid_author_data(&store);
    assert_eq!(authors.len(), source.as_array().unwrap().len());
    for ((author, error), json) in authors.iter().zip(source.as_array().unwrap()) {
        assert_eq!(i64::from(author.id_book), json["testData"]["idBook"].as_i64().unwrap());
        assert_eq!(error, &json["expectedError"]);
    }
}

#[test]
fn id_providers_follow_test_ids() {
    let store = FixtureStore::default();
    let source = raw(&store, TEST_IDS);

    assert_eq!(
        providers::book_ids(&store).len(),
        source["validBookIds"].as_array().unwrap().len()
    );
    assert_eq!(
        providers::author_ids(&store).len(),
        source["validAuthorIds"].as_array().unwrap().len()
    );

    let invalid = providers::invalid_ids(&store);
    let expected: Vec<(serde_json::Value, String)> = source["invalidIds"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| (entry["id"].clone(), entry["description"].as_str().unwrap().to_string()))
        .collect();
    assert_eq!(invalid, expected);
}

#[test]
fn bulk_and_validation_providers_cover_every_row() {
    let store = FixtureStore::default();

    let bulk = raw(&store, BULK_TEST_DATA);
    assert_eq!(providers::bulk_test_data(&store).len(), bulk.as_array().unwrap().len());

    let validation = raw(&store, VALIDATION_DATA);
    assert_eq!(
        providers::page_count_validation(&store).len(),
        validation["pageCountValidation"].as_array().unwrap().len()
    );
    assert_eq!(
        providers::book_search_data(&store).len(),
        validation["bookSearchTerms"].as_array().unwrap().len()
    );
}

#[test]
fn loaders_are_idempotent() {
    let store = FixtureStore::default();

    assert_eq!(store.valid_books(), store.valid_books());
    assert_eq!(store.invalid_authors(), store.invalid_authors());
    assert_eq!(store.test_ids(), store.test_ids());
    assert_eq!(store.bulk_records(), store.bulk_records());
    assert_eq!(store.validation_data(), store.validation_data());
}

#[test]
fn concurrent_loads_agree() {
    let store = FixtureStore::default();
    let expected = store.valid_books();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || store.valid_books())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn missing_directory_still_completes() {
    let store = FixtureStore::new("/nonexistent/fixture/dir");

    let ran = providers::run_cases("bulk operations", providers::bulk_test_data(&store), |_, _| {});

    assert_eq!(ran, 0);
    assert_eq!(store.diagnose().len(), 7);
}
