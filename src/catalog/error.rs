//! Error types for catalog construction and queries.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while building or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A source document failed validation; fatal to the build.
    #[error("invalid document {path}: {reason}")]
    Validation {
        /// Collection-relative path of the offending document.
        path: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Two documents resolve to the same slug; fatal to the build.
    #[error("duplicate slug {slug:?}: {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    /// No document has the requested slug.
    #[error("document not found: {slug}")]
    NotFound { slug: String },

    /// Reading the source set failed.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Whether this error is the per-query, recoverable kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}
