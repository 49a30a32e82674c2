//! Argument sets for data-driven scenarios.
//!
//! Each provider turns one fixture category into the arguments a scenario
//! body takes, in fixture order. Providers never fail: a missing or broken
//! fixture gives an empty set, and [`run_cases`] then runs the body zero
//! times.

use crate::fixtures::FixtureStore;
use crate::generator::FixtureGenerator;
use crate::types::{Author, Book};

/// Number of entities the random providers produce per call.
pub const RANDOM_CASES: usize = 3;

pub fn valid_book_data(store: &FixtureStore) -> Vec<Book> {
    store.valid_books()
}

pub fn invalid_book_data(store: &FixtureStore) -> Vec<(Book, String)> {
    store
        .invalid_books()
        .into_iter()
        .map(|fixture| (fixture.test_data, fixture.expected_error))
        .collect()
}

pub fn valid_author_data(store: &FixtureStore) -> Vec<Author> {
    store.valid_authors()
}

pub fn invalid_author_data(store: &FixtureStore) -> Vec<(Author, String)> {
    store
        .invalid_authors()
        .into_iter()
        .map(|fixture| (fixture.test_data, fixture.expected_error))
        .collect()
}

pub fn book_ids(store: &FixtureStore) -> Vec<i32> {
    store.test_ids().valid_book_ids
}

pub fn author_ids(store: &FixtureStore) -> Vec<i32> {
    store.test_ids().valid_author_ids
}

/// `(id, description)` pairs. Ids stay raw JSON: numbers, strings, anything
/// the fixture author chose.
pub fn invalid_ids(store: &FixtureStore) -> Vec<(serde_json::Value, String)> {
    store
        .test_ids()
        .invalid_ids
        .into_iter()
        .map(|invalid| (invalid.id, invalid.description))
        .collect()
}

/// `(search term, description)` pairs.
pub fn book_search_data(store: &FixtureStore) -> Vec<(String, String)> {
    store
        .validation_data()
        .book_search_terms
        .into_iter()
        .map(|term| (term.search_term, term.description))
        .collect()
}

/// `(book id, book title, author first name, author last name)`.
pub fn bulk_test_data(store: &FixtureStore) -> Vec<(i32, String, String, String)> {
    store
        .bulk_records()
        .into_iter()
        .map(|r| (r.book_id, r.book_title, r.author_first_name, r.author_last_name))
        .collect()
}

/// `(page count, should be valid, description)`.
pub fn page_count_validation(store: &FixtureStore) -> Vec<(i32, bool, String)> {
    store
        .validation_data()
        .page_count_validation
        .into_iter()
        .map(|rule| (rule.page_count, rule.should_be_valid, rule.description))
        .collect()
}

/// Fresh random books, different on every call.
pub fn random_book_data() -> Vec<Book> {
    random_book_data_with(&mut FixtureGenerator::new())
}

pub fn random_book_data_with(generator: &mut FixtureGenerator) -> Vec<Book> {
    (0..RANDOM_CASES).map(|_| generator.random_book()).collect()
}

/// Fresh random authors attached to books 1, 2 and 3.
pub fn random_author_data() -> Vec<Author> {
    random_author_data_with(&mut FixtureGenerator::new())
}

pub fn random_author_data_with(generator: &mut FixtureGenerator) -> Vec<Author> {
    (1..=RANDOM_CASES as i32).map(|id_book| generator.random_author(id_book)).collect()
}

/// Run `body` once per case, in order, and return how many cases ran.
pub fn run_cases<T, F>(scenario: &str, cases: Vec<T>, mut body: F) -> usize
where
    F: FnMut(usize, T),
{
    let total = cases.len();
    if total == 0 {
        tracing::warn!(scenario, "no cases provided; scenario skipped");
        return 0;
    }
    tracing::info!(scenario, cases = total, "running scenario");
    for (index, case) in cases.into_iter().enumerate() {
        tracing::info!(scenario, case = index + 1, of = total, "starting case");
        body(index, case);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(files: &[(&str, &str)]) -> (tempfile::TempDir, FixtureStore) {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            std::fs::write(dir.path().join(name), contents).unwrap();
        }
        let store = FixtureStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn single_book_fixture_yields_one_case() {
        let (_dir, store) = store_with(&[(
            "validBooks.json",
            r#"[{"id":1,"title":"A","description":"d","pageCount":10,"excerpt":"e","publishDate":"2024-01-01T00:00:00Z"}]"#,
        )]);
        let cases = valid_book_data(&store);
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].title, "A");
    }

    #[test]
    fn negative_invalid_id_case() {
        let (_dir, store) = store_with(&[(
            "testIds.json",
            r#"{"invalidIds":[{"id":-1,"description":"negative id"}]}"#,
        )]);
        let cases = invalid_ids(&store);
        assert_eq!(cases, vec![(serde_json::json!(-1), "negative id".to_string())]);
        assert!(book_ids(&store).is_empty());
    }

    #[test]
    fn absent_bulk_fixture_runs_nothing() {
        let (_dir, store) = store_with(&[]);
        let cases = bulk_test_data(&store);
        assert!(cases.is_empty());
        let ran = run_cases("bulk operations", cases, |_, _| panic!("no case expected"));
        assert_eq!(ran, 0);
    }

    #[test]
    fn invalid_author_pairs_keep_fields_apart() {
        let (_dir, store) = store_with(&[(
            "invalidAuthors.json",
            r#"[{"testData":{"idBook":0,"firstName":"Jane","lastName":"Roe"},"expectedError":"book id must be positive"}]"#,
        )]);
        let cases = invalid_author_data(&store);
        let (author, error) = &cases[0];
        assert_eq!(author.first_name, "Jane");
        assert_eq!(author.last_name, "Roe");
        assert_eq!(error, "book id must be positive");
    }

    #[test]
    fn validation_providers_keep_order() {
        let (_dir, store) = store_with(&[(
            "validationData.json",
            r#"{"pageCountValidation":[{"pageCount":0,"shouldBeValid":true,"description":"zero"},{"pageCount":-5,"shouldBeValid":false,"description":"negative"}],
                "bookSearchTerms":[{"searchTerm":"Book","description":"common word"}]}"#,
        )]);
        assert_eq!(
            page_count_validation(&store),
            vec![(0, true, "zero".to_string()), (-5, false, "negative".to_string())]
        );
        assert_eq!(
            book_search_data(&store),
            vec![("Book".to_string(), "common word".to_string())]
        );
    }

    #[test]
    fn random_providers_produce_three_cases() {
        let books = random_book_data();
        assert_eq!(books.len(), RANDOM_CASES);
        assert!(books.iter().all(|b| b.id == 0 && !b.title.is_empty()));

        let authors = random_author_data();
        let id_books: Vec<i32> = authors.iter().map(|a| a.id_book).collect();
        assert_eq!(id_books, [1, 2, 3]);
    }

    #[test]
    fn run_cases_visits_in_order() {
        let mut seen = Vec::new();
        let ran = run_cases("order", vec!["a", "b", "c"], |index, case| seen.push((index, case)));
        assert_eq!(ran, 3);
        assert_eq!(seen, [(0, "a"), (1, "b"), (2, "c")]);
    }
}
