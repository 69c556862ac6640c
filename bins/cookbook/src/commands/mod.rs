//! CLI command implementations

pub mod convert;
pub mod scale;
pub mod search;

use cookbook_core::config::Config;
use cookbook_core::{Error, Result, ResultExt};
use std::path::Path;

/// Settings shared by every command
pub struct Context {
    /// Loaded configuration
    pub config: Config,
    /// Print JSON instead of text
    pub json: bool,
}

/// Read an input file, naming it in the error
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Reading {}", path.display()))
}
