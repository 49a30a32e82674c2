//! Error types for the API client and the fixture store.
//!
//! # Design
//! `ApiError` is what a suite sees when a request goes wrong; an
//! `UnexpectedStatus` is the assertion failure that fails a test case.
//! `FixtureError` never reaches a suite through the empty-on-error loaders,
//! only through `FixtureStore::try_*` and `FixtureStore::diagnose`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by `ApiClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 where a different status was expected.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than the expected one.
    #[error("expected HTTP {expected}, got HTTP {status}: {body}")]
    UnexpectedStatus { expected: u16, status: u16, body: String },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Why a fixture file could not be loaded.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read fixture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FixtureError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            FixtureError::NotFound { path }
            | FixtureError::Io { path, .. }
            | FixtureError::Parse { path, .. } => path,
        }
    }
}
