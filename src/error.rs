//! Error types for catalog operations

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Main error type for catalog operations.
///
/// Every failure is scoped to the single operation that produced it; none of
/// them leaves the fragment directory in a different state than before the call.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A caller-supplied value was rejected before any state changed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Directory or file I/O failed
    #[error("IO failure on {}: {source}", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A fragment on disk could not be parsed
    #[error("Corrupt fragment {}: {reason}", path.display())]
    CorruptFragment { path: PathBuf, reason: String },

    /// Invalid IRI or blank node label
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Query parsing or evaluation error
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        CatalogError::IoFailure { path: path.as_ref().to_path_buf(), source }
    }

    pub(crate) fn corrupt(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        CatalogError::CorruptFragment { path: path.as_ref().to_path_buf(), reason: reason.into() }
    }
}

impl From<oxigraph::model::IriParseError> for CatalogError {
    fn from(err: oxigraph::model::IriParseError) -> Self {
        CatalogError::InvalidIri(err.to_string())
    }
}

impl From<oxigraph::model::BlankNodeIdParseError> for CatalogError {
    fn from(err: oxigraph::model::BlankNodeIdParseError) -> Self {
        CatalogError::InvalidIri(err.to_string())
    }
}

impl From<oxigraph::store::StorageError> for CatalogError {
    fn from(err: oxigraph::store::StorageError) -> Self {
        CatalogError::Query(err.to_string())
    }
}

impl From<oxigraph::sparql::QueryEvaluationError> for CatalogError {
    fn from(err: oxigraph::sparql::QueryEvaluationError) -> Self {
        CatalogError::Query(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Config(err.to_string())
    }
}
