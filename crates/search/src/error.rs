//! Error types for the search crate.

use grocer_catalog::CatalogError;
use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while building criteria or running a search.
///
/// Searching itself never fails; errors only come from turning loose input
/// into [`SearchCriteria`](crate::SearchCriteria).
#[derive(Debug, Error)]
pub enum SearchError {
    /// Unknown sort key, direction, category or store
    #[error("Invalid search criteria: {0}")]
    Configuration(String),

    /// Catalog or criteria JSON could not be read
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with grocer-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Criteria could not be resolved
    Configuration = 11001,
    /// Malformed JSON input
    Json = 11002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::Configuration(_) => SearchErrorCode::Configuration,
            SearchError::Json(_) => SearchErrorCode::Json,
        }
    }
}

impl From<CatalogError> for SearchError {
    fn from(err: CatalogError) -> Self {
        SearchError::Configuration(err.to_string())
    }
}
