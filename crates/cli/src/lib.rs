//! Terminal output helpers for the cookbook tools
//!
//! - Status messages
//! - Aligned ingredient listings
//! - Error reports and JSON output

#![warn(missing_docs)]

pub mod output;
