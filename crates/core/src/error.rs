//! Application errors with codes, context and recovery suggestions
//!
//! Library crates keep their own small error enums; this type wraps them
//! for the command-line tool with:
//! - Error codes for programmatic handling
//! - Detailed error context
//! - Recovery suggestions
//! - Serializable error reports

use cookbook_scaling::ScalingError;
use cookbook_search::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // IO errors (2xxx)
    /// Generic IO failure
    IoError = 2000,
    /// File does not exist
    FileNotFound = 2001,
    /// File cannot be read
    PermissionDenied = 2002,

    // Configuration errors (3xxx)
    /// Generic configuration failure
    ConfigError = 3000,
    /// Config file given but missing
    ConfigNotFound = 3001,
    /// Config or data file is not valid TOML/JSON
    ConfigParseError = 3002,
    /// Config values out of range
    ConfigValidationError = 3003,

    // Scaling errors (4xxx)
    /// Serving count of zero
    InvalidServings = 4001,
    /// Recipe without a serving count
    MissingServings = 4002,

    // Search errors (5xxx)
    /// Match threshold out of range
    InvalidThreshold = 5001,
    /// Page size of zero
    InvalidPageSize = 5002,

    // Validation errors (6xxx)
    /// Input data not in the expected shape
    InvalidInput = 6001,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            2 => "IO",
            3 => "Configuration",
            4 => "Scaling",
            5 => "Search",
            6 => "Validation",
            _ => "Unknown",
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.code() / 1000 {
            3 => exit_codes::CONFIG_ERROR,
            4 | 5 | 6 => exit_codes::INPUT_ERROR,
            _ => exit_codes::FAILURE,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Convert to a serializable report
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(|e| e.to_string()),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    // Convenience constructors

    /// Generic configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// A configuration file that was asked for but does not exist
    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a cookbook.toml file or drop --config to use the defaults")
    }

    /// Configuration values out of range
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigValidationError, message)
    }
}

/// Serializable error report for logging and JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error code
    pub code: ErrorCode,
    /// Error code as `E0000`
    pub code_str: String,
    /// Error category
    pub category: String,
    /// Human-readable message
    pub message: String,
    /// Additional context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Recovery suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Source error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Command succeeded
    pub const SUCCESS: i32 = 0;
    /// Unclassified failure
    pub const FAILURE: i32 = 1;
    /// Configuration could not be loaded
    pub const CONFIG_ERROR: i32 = 3;
    /// Recipe, amount or listing data was rejected
    pub const INPUT_ERROR: i32 = 4;
}

// Implement From for common error types

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorCode::InvalidInput, format!("JSON parse error: {}", err))
            .with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {}", err))
            .with_source(err)
    }
}

impl From<ScalingError> for Error {
    fn from(err: ScalingError) -> Self {
        match err {
            ScalingError::InvalidServings(_) => Error::new(ErrorCode::InvalidServings, err.to_string())
                .with_suggestion("Serving counts start at 1"),
            ScalingError::MissingServings(_) => Error::new(ErrorCode::MissingServings, err.to_string())
                .with_suggestion("Add a \"people\" field to the recipe"),
            ScalingError::JsonError(_) => Error::new(ErrorCode::InvalidInput, err.to_string()),
        }
        .with_source(err)
    }
}

impl From<SearchError> for Error {
    fn from(err: SearchError) -> Self {
        let code = match err {
            SearchError::InvalidThreshold(_) => ErrorCode::InvalidThreshold,
            SearchError::InvalidPageSize => ErrorCode::InvalidPageSize,
            SearchError::JsonError(_) => ErrorCode::InvalidInput,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach context to the error
    fn context(self, context: impl Into<String>) -> Result<T>;
    /// Attach a recovery suggestion to the error
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::InvalidServings.to_string(), "E4001");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::IoError.category(), "IO");
        assert_eq!(ErrorCode::MissingServings.category(), "Scaling");
        assert_eq!(ErrorCode::InvalidPageSize.category(), "Search");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ErrorCode::ConfigParseError.exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(ErrorCode::InvalidServings.exit_code(), exit_codes::INPUT_ERROR);
        assert_eq!(ErrorCode::FileNotFound.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::config_not_found("/path/to/cookbook.toml")
            .with_context("While loading configuration");

        assert_eq!(err.code, ErrorCode::ConfigNotFound);
        assert!(err.context.is_some());
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_from_scaling_error() {
        let err: Error = ScalingError::MissingServings("Toast".into()).into();
        assert_eq!(err.code, ErrorCode::MissingServings);
        assert!(err.message.contains("Toast"));
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_from_search_error() {
        let err: Error = SearchError::InvalidPageSize.into();
        assert_eq!(err.code, ErrorCode::InvalidPageSize);
        assert_eq!(err.exit_code(), exit_codes::INPUT_ERROR);
    }

    #[test]
    fn test_result_ext() {
        let result: Result<()> = Err(Error::new(ErrorCode::InvalidInput, "bad row"));
        let err = result.context("Reading recipe.json").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("Reading recipe.json"));
    }

    #[test]
    fn test_error_report_serialization() {
        let err = Error::config("Unknown section").with_context("cookbook.toml");

        let report = err.to_report();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("E3000"));
        assert!(json.contains("Configuration"));
        assert!(!json.contains("suggestion"));
    }

    #[test]
    fn test_error_report_carries_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "recipe.json missing");
        let report = Error::from(io).with_context("Reading recipe.json").to_report();

        assert_eq!(report.code_str, "E2001");
        assert_eq!(report.category, "IO");
        assert_eq!(report.source.as_deref(), Some("recipe.json missing"));
        assert_eq!(report.context.as_deref(), Some("Reading recipe.json"));
    }
}
