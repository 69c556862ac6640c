//! Parsed search queries.

use crate::tokenize;

/// Query prefix that widens the search to each item's advanced text.
pub const DEFAULT_ADVANCED_PREFIX: &str = "advanced:";

/// A normalised search query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    tokens: Vec<String>,
    advanced: bool,
}

impl Query {
    /// Parse a raw query from the search bar.
    ///
    /// A query starting with `advanced_prefix` has the prefix removed and
    /// is marked advanced. Repeated tokens count once.
    ///
    /// ```
    /// use cookbook_search::Query;
    ///
    /// let query = Query::parse("  Advanced: Vegan  vegan Curry", "advanced:");
    /// assert!(query.is_advanced());
    /// assert_eq!(query.tokens(), ["vegan", "curry"]);
    /// ```
    pub fn parse(raw: &str, advanced_prefix: &str) -> Self {
        let lowered = raw.to_lowercase();
        let trimmed = lowered.trim();
        let prefix = advanced_prefix.to_lowercase();

        let (text, advanced) = match trimmed.strip_prefix(prefix.as_str()) {
            Some(rest) if !prefix.is_empty() => (rest, true),
            _ => (trimmed, false),
        };

        let mut tokens: Vec<String> = Vec::new();
        for token in tokenize(text) {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }

        Self { tokens, advanced }
    }

    /// Distinct query tokens in the order typed.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when there is nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when the query asked for advanced text to be searched too.
    pub fn is_advanced(&self) -> bool {
        self.advanced
    }
}
