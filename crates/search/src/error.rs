//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while setting up a search.
///
/// Filtering itself never fails.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Match threshold outside `[0, 1)`
    #[error("Invalid match threshold: {0} (must be at least 0 and below 1)")]
    InvalidThreshold(f64),

    /// Page size of zero
    #[error("Invalid page size: must be at least 1")]
    InvalidPageSize,

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with cookbook-core error handling.
/// Range: 12xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Match threshold out of range
    InvalidThreshold = 12001,
    /// Page size of zero
    InvalidPageSize = 12002,
    /// JSON parsing error
    JsonParsing = 12003,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidThreshold(_) => SearchErrorCode::InvalidThreshold,
            SearchError::InvalidPageSize => SearchErrorCode::InvalidPageSize,
            SearchError::JsonError(_) => SearchErrorCode::JsonParsing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SearchError::InvalidThreshold(1.5).code() as u32, 12001);
        assert_eq!(SearchError::InvalidPageSize.code(), SearchErrorCode::InvalidPageSize);

        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert_eq!(SearchError::from(json_err).code(), SearchErrorCode::JsonParsing);
    }

    #[test]
    fn test_threshold_message() {
        assert!(SearchError::InvalidThreshold(1.5).to_string().contains("1.5"));
    }
}
