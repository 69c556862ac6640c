//! Token-overlap similarity between a query and an item.

/// Score an item must exceed to match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.5;

/// Number of query tokens found inside at least one item token.
///
/// Containment is by substring, so `"chick"` is found in `"chickpea"`.
pub fn overlap_count(query_tokens: &[String], item_tokens: &[String]) -> usize {
    query_tokens
        .iter()
        .filter(|query| item_tokens.iter().any(|token| token.contains(query.as_str())))
        .count()
}

/// Share of query tokens found in the item, from 0 to 1.
///
/// Returns `None` for an empty query, which has no defined score.
///
/// # Example
/// ```
/// use cookbook_search::{overlap_score, tokenize};
///
/// let query = tokenize("chicken soup");
/// let item = tokenize("creamy chicken noodle soup");
/// assert_eq!(overlap_score(&query, &item), Some(1.0));
/// assert_eq!(overlap_score(&[], &item), None);
/// ```
pub fn overlap_score(query_tokens: &[String], item_tokens: &[String]) -> Option<f64> {
    if query_tokens.is_empty() {
        return None;
    }
    Some(overlap_count(query_tokens, item_tokens) as f64 / query_tokens.len() as f64)
}

/// Whether a score is strictly above `threshold`. No score never passes.
#[inline]
pub fn passes(score: Option<f64>, threshold: f64) -> bool {
    score.is_some_and(|score| score > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn score(query: &str, item: &str) -> Option<f64> {
        overlap_score(&tokenize(query), &tokenize(item))
    }

    #[test]
    fn test_full_overlap() {
        assert_eq!(score("chicken soup", "creamy chicken noodle soup"), Some(1.0));
    }

    #[test]
    fn test_substring_containment() {
        assert_eq!(score("chick", "chickpea curry"), Some(1.0));
        assert_eq!(score("pea", "chickpea curry"), Some(1.0));
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(score("xyz", "creamy chicken noodle soup"), Some(0.0));
    }

    #[test]
    fn test_partial_overlap() {
        assert_eq!(score("chicken curry rice", "chicken curry"), Some(2.0 / 3.0));
        assert_eq!(score("chicken curry", "chicken soup"), Some(0.5));
    }

    #[test]
    fn test_token_does_not_span_words() {
        // tokens are matched one by one, never across a space
        assert_eq!(score("chickensoup", "chicken soup"), Some(0.0));
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!passes(Some(0.5), DEFAULT_MATCH_THRESHOLD));
        assert!(passes(Some(0.51), DEFAULT_MATCH_THRESHOLD));
        assert!(!passes(None, DEFAULT_MATCH_THRESHOLD));
        assert!(!passes(None, 0.0));
    }
}
