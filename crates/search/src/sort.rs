//! Sorting the listing by a card attribute.

use crate::SearchItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Attribute value as compared when sorting.
///
/// Numeric strings compare as numbers, the way page data attributes are
/// read. Numbers sort before text in either direction.
#[derive(Debug, Clone, PartialEq)]
enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
    Missing,
}

impl<'a> SortKey<'a> {
    fn of(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::Number(number)) => number.as_f64().map_or(SortKey::Missing, SortKey::Number),
            Some(Value::String(text)) => match text.trim().parse::<f64>() {
                Ok(number) if number.is_finite() => SortKey::Number(number),
                _ => SortKey::Text(text),
            },
            Some(Value::Bool(flag)) => SortKey::Number(if *flag { 1.0 } else { 0.0 }),
            _ => SortKey::Missing,
        }
    }

    /// Items without the attribute stay at the end in either direction;
    /// only values of the same kind are reversed for descending order.
    fn compare(&self, other: &Self, direction: SortDirection) -> Ordering {
        match (self, other) {
            (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
            (SortKey::Missing, _) => Ordering::Greater,
            (_, SortKey::Missing) => Ordering::Less,
            (SortKey::Number(a), SortKey::Number(b)) => direction.apply(a.total_cmp(b)),
            (SortKey::Text(a), SortKey::Text(b)) => direction.apply(a.cmp(b)),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Stable-sort `items` by one of their attributes.
///
/// Reset the view to its first page afterwards
/// ([`ViewState::reset_pages`](crate::ViewState::reset_pages)).
///
/// # Example
/// ```
/// use cookbook_search::{sort_by_attribute, SearchItem, SortDirection};
///
/// let mut items = vec![
///     SearchItem::new("a", "Stew").with_attribute("time", 90),
///     SearchItem::new("b", "Salad").with_attribute("time", 10),
/// ];
/// sort_by_attribute(&mut items, "time", SortDirection::Ascending);
/// assert_eq!(items[0].id, "b");
/// ```
pub fn sort_by_attribute(items: &mut [SearchItem], attribute: &str, direction: SortDirection) {
    items.sort_by(|a, b| {
        SortKey::of(a.attributes.get(attribute)).compare(&SortKey::of(b.attributes.get(attribute)), direction)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[SearchItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    fn listing() -> Vec<SearchItem> {
        vec![
            SearchItem::new("stew", "Beef stew").with_attribute("time", 90).with_attribute("name", "stew"),
            SearchItem::new("salad", "Salad").with_attribute("time", "10").with_attribute("name", "salad"),
            SearchItem::new("soup", "Soup").with_attribute("time", 30).with_attribute("name", "soup"),
            SearchItem::new("bread", "Bread"),
        ]
    }

    #[test]
    fn test_numeric_ascending() {
        let mut items = listing();
        sort_by_attribute(&mut items, "time", SortDirection::Ascending);
        assert_eq!(ids(&items), ["salad", "soup", "stew", "bread"]);
    }

    #[test]
    fn test_numeric_descending_keeps_missing_last() {
        let mut items = listing();
        sort_by_attribute(&mut items, "time", SortDirection::Descending);
        assert_eq!(ids(&items), ["stew", "soup", "salad", "bread"]);
    }

    #[test]
    fn test_text_attribute() {
        let mut items = listing();
        sort_by_attribute(&mut items, "name", SortDirection::Ascending);
        assert_eq!(ids(&items), ["salad", "soup", "stew", "bread"]);
    }

    #[test]
    fn test_unknown_attribute_keeps_order() {
        let mut items = listing();
        sort_by_attribute(&mut items, "rating", SortDirection::Descending);
        assert_eq!(ids(&items), ["stew", "salad", "soup", "bread"]);
    }

    #[test]
    fn test_numbers_before_text() {
        let mut items = vec![
            SearchItem::new("a", "").with_attribute("k", "abc"),
            SearchItem::new("b", "").with_attribute("k", 5),
        ];
        sort_by_attribute(&mut items, "k", SortDirection::Ascending);
        assert_eq!(ids(&items), ["b", "a"]);
    }

    #[test]
    fn test_numbers_before_text_descending() {
        let mut items = vec![
            SearchItem::new("a", "").with_attribute("k", "abc"),
            SearchItem::new("b", "").with_attribute("k", 5),
            SearchItem::new("c", "").with_attribute("k", "xyz"),
            SearchItem::new("d", "").with_attribute("k", 9),
            SearchItem::new("e", ""),
        ];
        sort_by_attribute(&mut items, "k", SortDirection::Descending);
        assert_eq!(ids(&items), ["d", "b", "c", "a", "e"]);
    }

    #[test]
    fn test_direction_serde() {
        let direction: SortDirection = serde_json::from_str(r#""descending""#).unwrap();
        assert_eq!(direction, SortDirection::Descending);
    }
}
