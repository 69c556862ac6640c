//! Client-side recipe search for Cookbook.
//!
//! This crate provides:
//! - Whitespace tokenisation of queries and recipe cards
//! - Token-overlap relevance filtering with an optional parallel scan
//! - Paging, saved-only and sort state for the recipe listing
//! - WASM bindings for browser usage

#![warn(missing_docs)]

mod error;
mod filter;
mod pagination;
mod query;
mod similarity;
mod sort;
mod tokenize;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Result, SearchError, SearchErrorCode};
pub use filter::{filter, items_from_json, SearchFilter, SearchItem, SearchOutcome};
pub use pagination::{validate_page_size, visible_items, PageView, ViewState, DEFAULT_PAGE_SIZE};
pub use query::{Query, DEFAULT_ADVANCED_PREFIX};
pub use similarity::{overlap_count, overlap_score, passes, DEFAULT_MATCH_THRESHOLD};
pub use sort::{sort_by_attribute, SortDirection};
pub use tokenize::tokenize;
