//! Filtering recipe cards by query.

use crate::query::{Query, DEFAULT_ADVANCED_PREFIX};
use crate::similarity::{overlap_score, passes, DEFAULT_MATCH_THRESHOLD};
use crate::{tokenize, Result, SearchError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One recipe card on the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Card identifier
    pub id: String,
    /// Text searched by every query (name, tags)
    #[serde(alias = "text")]
    pub searchable: String,
    /// Extra text searched only by advanced queries (ingredients)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced: Option<String>,
    /// Whether the reader saved this recipe
    #[serde(default)]
    pub saved: bool,
    /// Sortable attributes, e.g. `time` or `views`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl SearchItem {
    /// Creates an item with only searchable text.
    pub fn new(id: impl Into<String>, searchable: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            searchable: searchable.into(),
            advanced: None,
            saved: false,
            attributes: BTreeMap::new(),
        }
    }

    /// Sets the advanced search text.
    pub fn with_advanced(mut self, advanced: impl Into<String>) -> Self {
        self.advanced = Some(advanced.into());
        self
    }

    /// Marks the item as saved.
    pub fn with_saved(mut self, saved: bool) -> Self {
        self.saved = saved;
        self
    }

    /// Adds a sortable attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Tokens this item offers to `query`.
    fn tokens_for(&self, query: &Query) -> Vec<String> {
        match (&self.advanced, query.is_advanced()) {
            (Some(advanced), true) => tokenize(&format!("{} {}", self.searchable, advanced)),
            _ => tokenize(&self.searchable),
        }
    }
}

/// Parse a JSON array of items.
pub fn items_from_json(json: &str) -> Result<Vec<SearchItem>> {
    Ok(serde_json::from_str(json)?)
}

/// Result of filtering a list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// False when the query was blank and nothing was filtered
    pub filtering: bool,
    /// Ids of matching items, in list order
    pub matches: Vec<String>,
}

impl SearchOutcome {
    /// Whether `id` is among the matches.
    pub fn contains(&self, id: &str) -> bool {
        self.matches.iter().any(|m| m == id)
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Configurable query filter.
///
/// # Example
/// ```
/// use cookbook_search::{SearchFilter, SearchItem};
///
/// let items = vec![
///     SearchItem::new("1", "Creamy chicken noodle soup"),
///     SearchItem::new("2", "Beef stew"),
/// ];
///
/// let outcome = SearchFilter::new().filter("chicken soup", &items);
/// assert_eq!(outcome.matches, ["1"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    threshold: f64,
    advanced_prefix: String,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            advanced_prefix: DEFAULT_ADVANCED_PREFIX.to_string(),
        }
    }
}

impl SearchFilter {
    /// Filter with the default threshold and advanced prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score an item must exceed, validating it lies in `[0, 1)`.
    pub fn threshold(mut self, threshold: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&threshold) {
            return Err(SearchError::InvalidThreshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    /// Set the prefix that turns a query into an advanced query.
    pub fn advanced_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.advanced_prefix = prefix.into();
        self
    }

    /// Parse a raw query with this filter's prefix.
    pub fn parse_query(&self, raw: &str) -> Query {
        Query::parse(raw, &self.advanced_prefix)
    }

    /// Score one item against a parsed query. `None` for an empty query.
    pub fn score(&self, query: &Query, item: &SearchItem) -> Option<f64> {
        overlap_score(query.tokens(), &item.tokens_for(query))
    }

    /// Whether one item matches a parsed query.
    pub fn is_match(&self, query: &Query, item: &SearchItem) -> bool {
        passes(self.score(query, item), self.threshold)
    }

    /// Filter `items` by a raw query.
    ///
    /// A blank query disables filtering and every item matches.
    pub fn filter(&self, raw_query: &str, items: &[SearchItem]) -> SearchOutcome {
        let query = self.parse_query(raw_query);

        if query.is_empty() {
            return SearchOutcome {
                filtering: false,
                matches: items.iter().map(|item| item.id.clone()).collect(),
            };
        }

        let matches = self.matching_ids(&query, items);
        tracing::debug!(
            tokens = query.tokens().len(),
            advanced = query.is_advanced(),
            matches = matches.len(),
            total = items.len(),
            "Filtered recipe list"
        );

        SearchOutcome {
            filtering: true,
            matches,
        }
    }

    fn matching_ids(&self, query: &Query, items: &[SearchItem]) -> Vec<String> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            items
                .par_iter()
                .filter(|item| self.is_match(query, item))
                .map(|item| item.id.clone())
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            items
                .iter()
                .filter(|item| self.is_match(query, item))
                .map(|item| item.id.clone())
                .collect()
        }
    }
}

/// Filter `items` by `query` with default settings.
pub fn filter(query: &str, items: &[SearchItem]) -> SearchOutcome {
    SearchFilter::default().filter(query, items)
}
