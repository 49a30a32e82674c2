//! Domain records for the Books/Authors API and the fixture files that drive
//! the suite.
//!
//! # Design
//! Field names follow the API's camelCase wire format. Every struct is
//! `#[serde(default)]` so a fixture object that omits a field still loads,
//! with the field at its zero value. These types mirror the mock-server's
//! schema but are defined independently; the integration suites catch drift.

use serde::{Deserialize, Serialize};

/// A book as returned by `/Books`. An `id` of 0 means the server has not
/// assigned one yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub page_count: i32,
    pub excerpt: String,
    pub publish_date: String,
}

/// An author as returned by `/Authors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    pub id: i32,
    pub id_book: i32,
    pub first_name: String,
    pub last_name: String,
}

/// A malformed entity paired with the error text shown in test reports.
///
/// `expected_error` is descriptive only; suites assert on status codes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvalidFixture<T> {
    pub test_data: T,
    #[serde(default)]
    pub expected_error: String,
}

/// Contents of `testIds.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TestIds {
    pub valid_book_ids: Vec<i32>,
    pub valid_author_ids: Vec<i32>,
    pub invalid_ids: Vec<InvalidId>,
}

/// An identifier the API should reject. `id` is kept as raw JSON because
/// fixtures use negative numbers, huge numbers and non-numeric strings alike.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InvalidId {
    pub id: serde_json::Value,
    pub description: String,
}

impl InvalidId {
    pub fn path_segment(&self) -> String {
        path_segment(&self.id)
    }
}

/// A raw JSON id as it should appear in a URL path segment. JSON strings are
/// substituted without their quotes.
pub fn path_segment(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One row of `bulkTestData.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BulkRecord {
    pub book_id: i32,
    pub book_title: String,
    pub author_first_name: String,
    pub author_last_name: String,
}

/// Contents of `validationData.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationData {
    pub page_count_validation: Vec<PageCountRule>,
    pub book_search_terms: Vec<SearchTerm>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PageCountRule {
    pub page_count: i32,
    pub should_be_valid: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchTerm {
    pub search_term: String,
    pub description: String,
}
