//! Configuration schema definitions

use cookbook_search::{DEFAULT_ADVANCED_PREFIX, DEFAULT_MATCH_THRESHOLD, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// `[search]`
    #[serde(default)]
    pub search: SearchConfig,

    /// `[telemetry]`
    #[serde(default)]
    pub telemetry: TelemetrySection,
}

/// Listing search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cards per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Score an item must exceed to match
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,

    /// Query prefix that also searches ingredient text
    #[serde(default = "default_advanced_prefix")]
    pub advanced_prefix: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            match_threshold: default_match_threshold(),
            advanced_prefix: default_advanced_prefix(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_match_threshold() -> f64 {
    DEFAULT_MATCH_THRESHOLD
}

fn default_advanced_prefix() -> String {
    DEFAULT_ADVANCED_PREFIX.to_string()
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySection {
    /// Default level when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetrySection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
