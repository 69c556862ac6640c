//! Configuration loading and schema definitions
//!
//! ```toml
//! [search]
//! page_size = 20
//! match_threshold = 0.5
//! advanced_prefix = "advanced:"
//!
//! [telemetry]
//! log_level = "warn"
//! json = false
//! ```

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
