//! Error types for search operations

use crate::error::AppError;

/// Result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while configuring or addressing the search service.
///
/// Queries themselves never fail; these cover the edges where callers hand in
/// names or settings that do not resolve.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A document kind name that is not one of the five record kinds
    #[error("Unknown document kind: {0}")]
    UnknownDocumentKind(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Record source failed while (re)building the index
    #[error("Index build failed: {0}")]
    IndexBuildFailed(String),
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidConfiguration(msg) => AppError::Configuration(msg),
            SearchError::UnknownDocumentKind(_) => AppError::Validation(err.to_string()),
            SearchError::IndexBuildFailed(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<AppError> for SearchError {
    fn from(err: AppError) -> Self {
        SearchError::IndexBuildFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_into_app_error() {
        let err: AppError = SearchError::InvalidConfiguration("max_results".to_string()).into();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");

        let err: AppError = SearchError::UnknownDocumentKind("invoice".to_string()).into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("invoice"));
    }
}
