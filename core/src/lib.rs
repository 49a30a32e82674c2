//! Data-driven test support for the Books/Authors REST API.
//!
//! # Overview
//! Fixture JSON under `test-data/` is loaded into typed records
//! (`FixtureStore`), turned into per-scenario argument sets (`providers`),
//! and fed to suites that exercise the API through `ApiClient`.
//!
//! # Design
//! - Fixture loading never fails the caller: a missing or malformed file
//!   logs an error and yields no cases. `FixtureStore::diagnose` reports the
//!   same problems loudly on request.
//! - `Settings` is resolved once and passed by reference; there is no global
//!   configuration.
//! - Requests are plain `HttpRequest` data until `ApiClient::execute` sends
//!   them, so request shape and status checks are testable offline.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod fixtures;
pub mod generator;
pub mod http;
pub mod providers;
pub mod telemetry;
pub mod types;

pub use client::{expect_status, parse_json, ApiClient};
pub use config::Settings;
pub use endpoint::ApiEndpoint;
pub use error::{ApiError, FixtureError};
pub use fixtures::FixtureStore;
pub use generator::{split_name, FixtureGenerator, FALLBACK_LAST_NAME};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Author, Book, BulkRecord, InvalidFixture, InvalidId, TestIds, ValidationData};
