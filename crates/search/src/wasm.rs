//! WASM bindings for recipe search.

use crate::{filter, items_from_json, validate_page_size, visible_items, SearchFilter, ViewState};
use wasm_bindgen::prelude::*;

/// Filter recipe cards by a query.
///
/// # Arguments
/// * `query` - Search bar text
/// * `items_json` - JSON array of items with `id` and `searchable` (or `text`) fields
///
/// # Returns
/// JSON object `{"filtering": bool, "matches": [id, ...]}`; an empty
/// outcome if the items cannot be parsed
#[wasm_bindgen]
pub fn search_filter(query: &str, items_json: &str) -> String {
    let items = match items_from_json(items_json) {
        Ok(items) => items,
        Err(_) => return r#"{"filtering":true,"matches":[]}"#.to_string(),
    };

    serde_json::to_string(&filter(query, &items))
        .unwrap_or_else(|_| r#"{"filtering":true,"matches":[]}"#.to_string())
}

/// Score a single text against a query.
///
/// # Returns
/// Share of query tokens found (0 to 1), or -1 for a blank query
#[wasm_bindgen]
pub fn search_score(query: &str, text: &str) -> f64 {
    let filter = SearchFilter::new();
    let query = filter.parse_query(query);
    filter
        .score(&query, &crate::SearchItem::new("", text))
        .unwrap_or(-1.0)
}

/// Work out which cards to show.
///
/// # Arguments
/// * `items_json` - JSON array of items
/// * `state_json` - JSON view state `{"query", "pages", "only_saved"}`
/// * `page_size` - Cards per page
///
/// # Returns
/// JSON page view `{"visible", "total", "filtering", "has_more"}`
#[wasm_bindgen]
pub fn visible_page(items_json: &str, state_json: &str, page_size: usize) -> Result<String, JsValue> {
    let page_size = validate_page_size(page_size).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let items = items_from_json(items_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let state: ViewState = serde_json::from_str(state_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let view = visible_items(&items, &state, &SearchFilter::new(), page_size);

    serde_json::to_string(&view)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
