//! Endpoint descriptors for the Books and Authors resources.

use std::fmt::Display;

/// A resource path, optionally templated with `{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEndpoint {
    Books,
    BooksById,
    Authors,
    AuthorsById,
}

impl ApiEndpoint {
    pub const fn path(self) -> &'static str {
        match self {
            ApiEndpoint::Books => "/Books",
            ApiEndpoint::BooksById => "/Books/{id}",
            ApiEndpoint::Authors => "/Authors",
            ApiEndpoint::AuthorsById => "/Authors/{id}",
        }
    }

    /// Substitute `{id}` with the textual form of `id`. Paths without a
    /// placeholder come back unchanged.
    pub fn with_id(self, id: impl Display) -> String {
        self.path().replace("{id}", &id.to_string())
    }

    /// Resolve the path, substituting `id` when one is given.
    pub fn resolve(self, id: Option<&dyn Display>) -> String {
        match id {
            Some(id) => self.with_id(id),
            None => self.path().to_string(),
        }
    }
}
