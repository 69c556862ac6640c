//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use cookbook_search::SearchFilter;
use std::path::Path;

const CANDIDATES: [&str; 3] = ["cookbook.toml", ".cookbook.toml", ".config/cookbook.toml"];

/// Configuration wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist; without one the standard locations are
    /// searched relative to the working directory.
    pub fn load(path: Option<&str>) -> Result<Self> {
        Self::load_from(path, Path::new("."))
    }

    /// Like [`Config::load`], searching the standard locations under `root`
    pub fn load_from(path: Option<&str>, root: &Path) -> Result<Self> {
        let config_path = match path {
            Some(p) if !Path::new(p).exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_string()),
            None => find_config_file(root),
        };

        let schema = match &config_path {
            Some(p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        let config = Self {
            schema,
            path: config_path,
        };
        config.validate()?;

        tracing::debug!(path = ?config.path, "Loaded configuration");
        Ok(config)
    }

    /// Reject values the listing cannot work with
    pub fn validate(&self) -> Result<()> {
        let search = &self.schema.search;
        let context = self.path.as_deref().unwrap_or("defaults").to_string();

        if search.page_size == 0 {
            return Err(Error::config_invalid("search.page_size must be at least 1")).context(context);
        }
        if !(0.0..1.0).contains(&search.match_threshold) {
            return Err(Error::config_invalid(format!(
                "search.match_threshold must be in [0, 1), got {}",
                search.match_threshold
            )))
            .context(context);
        }
        Ok(())
    }

    /// Search filter built from the `[search]` section
    pub fn search_filter(&self) -> Result<SearchFilter> {
        let search = &self.schema.search;
        Ok(SearchFilter::new()
            .threshold(search.match_threshold)?
            .advanced_prefix(search.advanced_prefix.clone()))
    }
}

/// Find configuration file in standard locations
fn find_config_file(root: &Path) -> Option<String> {
    CANDIDATES
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|candidate| candidate.exists())
        .map(|candidate| candidate.display().to_string())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read config file {}: {}", path, e)).with_source(e))?;

    toml::from_str(&content).map_err(Error::from).context(path)
}
