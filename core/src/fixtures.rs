//! Fixture store: typed access to the JSON files under `test-data/`.
//!
//! # Design
//! One generic read (`try_document`) parses a whole file into any
//! `DeserializeOwned` shape. The empty-on-error layer on top of it logs the
//! failure and hands back an empty collection or the shape's zero value, so a
//! broken fixture shows up as a scenario with no cases instead of an aborted
//! run. `diagnose` is the loud counterpart for callers that want to know.
//!
//! Reads are pure: the store holds only a directory path.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::config::Settings;
use crate::error::FixtureError;
use crate::types::{Author, Book, BulkRecord, InvalidFixture, TestIds, ValidationData};

pub const VALID_BOOKS: &str = "validBooks.json";
pub const INVALID_BOOKS: &str = "invalidBooks.json";
pub const VALID_AUTHORS: &str = "validAuthors.json";
pub const INVALID_AUTHORS: &str = "invalidAuthors.json";
pub const TEST_IDS: &str = "testIds.json";
pub const BULK_TEST_DATA: &str = "bulkTestData.json";
pub const VALIDATION_DATA: &str = "validationData.json";

/// Read-only view over a fixture directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureStore {
    root: PathBuf,
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new(default_root())
    }
}

/// The workspace `test-data/` directory.
pub fn default_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("test-data")
}

impl FixtureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        match &settings.fixture_dir {
            Some(dir) => Self::new(dir.clone()),
            None => Self::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Parse `file` as a single JSON document of shape `T`.
    pub fn try_document<T: DeserializeOwned>(&self, file: &str) -> Result<T, FixtureError> {
        let path = self.path_of(file);
        let raw = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                FixtureError::NotFound { path: path.clone() }
            } else {
                FixtureError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        serde_json::from_str(&raw).map_err(|source| FixtureError::Parse { path, source })
    }

    /// Parse `file` as a JSON array of `T`.
    pub fn try_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, FixtureError> {
        self.try_document(file)
    }

    /// Array of `T`, or empty when the file is missing or malformed.
    pub fn collection<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        match self.try_collection(file) {
            Ok(records) => {
                tracing::info!(fixture = file, count = records.len(), "loaded fixture");
                records
            }
            Err(err) => {
                log_failure(file, &err);
                Vec::new()
            }
        }
    }

    /// Array of `{testData, expectedError}` envelopes around `T`.
    pub fn enveloped<T: DeserializeOwned>(&self, file: &str) -> Vec<InvalidFixture<T>> {
        self.collection(file)
    }

    /// Single object of shape `T`, or `T::default()` on failure.
    pub fn document<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        match self.try_document(file) {
            Ok(doc) => {
                tracing::info!(fixture = file, "loaded fixture");
                doc
            }
            Err(err) => {
                log_failure(file, &err);
                T::default()
            }
        }
    }

    pub fn valid_books(&self) -> Vec<Book> {
        self.collection(VALID_BOOKS)
    }

    pub fn invalid_books(&self) -> Vec<InvalidFixture<Book>> {
        self.enveloped(INVALID_BOOKS)
    }

    pub fn valid_authors(&self) -> Vec<Author> {
        self.collection(VALID_AUTHORS)
    }

    pub fn invalid_authors(&self) -> Vec<InvalidFixture<Author>> {
        self.enveloped(INVALID_AUTHORS)
    }

    pub fn test_ids(&self) -> TestIds {
        self.document(TEST_IDS)
    }

    pub fn bulk_records(&self) -> Vec<BulkRecord> {
        self.collection(BULK_TEST_DATA)
    }

    pub fn validation_data(&self) -> ValidationData {
        self.document(VALIDATION_DATA)
    }

    /// Try every fixture category and collect what failed. Nothing is
    /// logged; the caller decides how loud to be.
    pub fn diagnose(&self) -> Vec<FixtureError> {
        let checks = [
            self.try_collection::<Book>(VALID_BOOKS).err(),
            self.try_collection::<InvalidFixture<Book>>(INVALID_BOOKS).err(),
            self.try_collection::<Author>(VALID_AUTHORS).err(),
            self.try_collection::<InvalidFixture<Author>>(INVALID_AUTHORS).err(),
            self.try_document::<TestIds>(TEST_IDS).err(),
            self.try_collection::<BulkRecord>(BULK_TEST_DATA).err(),
            self.try_document::<ValidationData>(VALIDATION_DATA).err(),
        ];
        checks.into_iter().flatten().collect()
    }
}

fn log_failure(file: &str, err: &FixtureError) {
    match err {
        FixtureError::NotFound { path } => {
            tracing::error!(fixture = file, path = %path.display(), "could not find fixture file");
        }
        other => {
            tracing::error!(fixture = file, error = ?other, "error reading fixture data");
        }
    }
}
