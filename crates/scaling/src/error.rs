//! Error types for the scaling crate.

use thiserror::Error;

/// Result type alias for scaling operations.
pub type Result<T> = std::result::Result<T, ScalingError>;

/// Errors that can occur at the boundary of the converter.
///
/// `convert` itself is total; these only arise while building its inputs.
#[derive(Debug, Error)]
pub enum ScalingError {
    /// A serving count of zero
    #[error("Invalid serving count: {0} (must be at least 1)")]
    InvalidServings(u32),

    /// A recipe that does not say how many people it feeds
    #[error("Recipe '{0}' has no serving count and cannot be scaled")]
    MissingServings(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with cookbook-core error handling.
/// Range: 11xxx for scaling errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingErrorCode {
    /// Serving count of zero
    InvalidServings = 11001,
    /// Recipe without a serving count
    MissingServings = 11002,
    /// JSON parsing error
    JsonParsing = 11003,
}

impl ScalingError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ScalingErrorCode {
        match self {
            ScalingError::InvalidServings(_) => ScalingErrorCode::InvalidServings,
            ScalingError::MissingServings(_) => ScalingErrorCode::MissingServings,
            ScalingError::JsonError(_) => ScalingErrorCode::JsonParsing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ScalingError::InvalidServings(0).code() as u32, 11001);
        assert_eq!(
            ScalingError::MissingServings("Soup".into()).code(),
            ScalingErrorCode::MissingServings
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: ScalingError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.code(), ScalingErrorCode::JsonParsing);
        assert!(err.to_string().starts_with("JSON parsing error"));
    }
}
