//! Listing view state: which cards are on screen.
//!
//! The listing shows cards in pages of a fixed size and grows by one page
//! each time the reader scrolls to the bottom. All of that state lives in a
//! [`ViewState`] value owned by the caller.

use crate::{Result, SearchError, SearchFilter, SearchItem};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Cards per page on the listing.
pub const DEFAULT_PAGE_SIZE: usize = 20;

fn first_page() -> usize {
    1
}

/// Reject a page size of zero.
pub fn validate_page_size(page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(SearchError::InvalidPageSize);
    }
    Ok(page_size)
}

/// What the reader asked to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Current search bar text
    #[serde(default)]
    pub query: String,
    /// Pages loaded so far, at least one
    #[serde(default = "first_page")]
    pub pages: usize,
    /// Show only saved recipes
    #[serde(default)]
    pub only_saved: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            pages: first_page(),
            only_saved: false,
        }
    }
}

impl ViewState {
    /// Fresh view: no query, one page, all recipes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query and go back to the first page.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    /// Restrict the view to saved recipes.
    pub fn with_only_saved(mut self, only_saved: bool) -> Self {
        self.only_saved = only_saved;
        self
    }

    /// Replace the query in place and go back to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.reset_pages();
    }

    /// Go back to the first page, e.g. after re-sorting.
    pub fn reset_pages(&mut self) {
        self.pages = first_page();
    }

    /// Number of cards the loaded pages can hold.
    pub fn limit(&self, page_size: usize) -> usize {
        self.pages.max(1).saturating_mul(page_size)
    }

    /// Load one more page if there are cards left to show.
    ///
    /// Returns whether a page was added.
    pub fn next_page(&mut self, total: usize, page_size: usize) -> bool {
        if self.limit(page_size) < total {
            self.pages = self.pages.max(1) + 1;
            true
        } else {
            false
        }
    }
}

/// The cards to show for a [`ViewState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// Ids of cards on screen, in list order
    pub visible: Vec<String>,
    /// Cards that would be shown with every page loaded
    pub total: usize,
    /// Whether a search is narrowing the list
    pub filtering: bool,
    /// Whether scrolling further would load more cards
    pub has_more: bool,
}

/// Work out which cards are visible.
///
/// Candidates are the search matches (every item for a blank query),
/// narrowed to saved items when asked; the loaded pages show the first
/// `pages * page_size` of them.
///
/// # Example
/// ```
/// use cookbook_search::{visible_items, SearchFilter, SearchItem, ViewState};
///
/// let items: Vec<SearchItem> = (0..45)
///     .map(|i| SearchItem::new(i.to_string(), format!("recipe {}", i)))
///     .collect();
///
/// let mut state = ViewState::new();
/// let view = visible_items(&items, &state, &SearchFilter::new(), 20);
/// assert_eq!(view.visible.len(), 20);
/// assert!(view.has_more);
///
/// assert!(state.next_page(view.total, 20));
/// let view = visible_items(&items, &state, &SearchFilter::new(), 20);
/// assert_eq!(view.visible.len(), 40);
/// ```
pub fn visible_items(
    items: &[SearchItem],
    state: &ViewState,
    filter: &SearchFilter,
    page_size: usize,
) -> PageView {
    let outcome = filter.filter(&state.query, items);
    let matches: HashSet<&str> = outcome.matches.iter().map(String::as_str).collect();

    let candidates: Vec<&SearchItem> = items
        .iter()
        .filter(|item| !state.only_saved || item.saved)
        .filter(|item| !outcome.filtering || matches.contains(item.id.as_str()))
        .collect();

    let total = candidates.len();
    let limit = state.limit(page_size);

    PageView {
        visible: candidates
            .into_iter()
            .take(limit)
            .map(|item| item.id.clone())
            .collect(),
        total,
        filtering: outcome.filtering,
        has_more: limit < total,
    }
}
