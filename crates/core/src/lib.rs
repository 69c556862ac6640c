//! Shared pieces of the cookbook tools
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use cookbook_core::config::Config;
//!
//! let config = Config::load(None)?;
//! let filter = config.search_filter()?;
//! # Ok::<(), cookbook_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{exit_codes, Error, ErrorCode, ErrorReport, Result, ResultExt};
