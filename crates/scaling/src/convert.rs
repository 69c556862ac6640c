//! Scaling an amount from one serving count to another.

use crate::amount::{classify, AmountShape, IngredientAmount, NumericSpan, SpanValue};
use crate::fraction::{format_decimal, format_frac, reduce, scale_fraction};
use crate::glyph::{self, ZERO_THIRDS};
use crate::Servings;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A converted amount, ready to be put on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    /// Formatted text
    Text(String),
    /// Raw scaled number (non-integer numeric amounts only)
    Number(f64),
}

impl DisplayValue {
    /// The amount exactly as authored.
    pub fn original(amount: &IngredientAmount) -> Self {
        match amount {
            IngredientAmount::Integer(value) => DisplayValue::Text(value.to_string()),
            IngredientAmount::Float(value) => DisplayValue::Number(*value),
            IngredientAmount::Text(text) => DisplayValue::Text(text.clone()),
        }
    }

    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DisplayValue::Text(text) => Some(text),
            DisplayValue::Number(_) => None,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Text(text) => f.write_str(text),
            DisplayValue::Number(value) => write!(f, "{}", value),
        }
    }
}

/// Ratio `people/base` in lowest terms, formatted.
///
/// ```
/// use cookbook_scaling::{scale_ratio, Servings};
///
/// let ratio = scale_ratio(Servings::new(4).unwrap(), Servings::new(2).unwrap());
/// assert_eq!(ratio, "1/2");
/// ```
pub fn scale_ratio(base: Servings, people: Servings) -> String {
    let (n, d) = reduce(people.as_u64(), base.as_u64());
    format_frac(n, d)
}

/// Scale `amount`, authored for `base` people, to `people`.
///
/// Never fails: amounts that cannot be scaled numerically are shown with the
/// scale factor in front, e.g. `"2 * 1 ½"`.
///
/// # Example
/// ```
/// use cookbook_scaling::{convert, DisplayValue, IngredientAmount, Servings};
///
/// let two = Servings::new(2).unwrap();
/// let four = Servings::new(4).unwrap();
///
/// let scaled = convert(&IngredientAmount::Integer(1), two, four);
/// assert_eq!(scaled, DisplayValue::Text("2".into()));
///
/// let scaled = convert(&IngredientAmount::from("½ cup"), two, four);
/// assert_eq!(scaled.to_string(), "1 cup");
/// ```
pub fn convert(amount: &IngredientAmount, base: Servings, people: Servings) -> DisplayValue {
    if base == people {
        return DisplayValue::original(amount);
    }

    let shape = classify(amount);
    tracing::debug!(shape = shape.name(), %base, %people, "Scaling amount");

    match shape {
        AmountShape::Integer(count) => match scale_fraction(count, 1, base.as_u64(), people.as_u64()) {
            Some(scaled) => DisplayValue::Text(scaled),
            None => {
                tracing::debug!(count, "Scaled count overflows, annotating instead");
                annotate(amount, base, people)
            }
        },
        AmountShape::Float(value) => {
            DisplayValue::Number(f64::from(people.get()) * value / f64::from(base.get()))
        }
        AmountShape::Glyph(text) => DisplayValue::Text(replace_glyphs(text, base, people)),
        AmountShape::NumericSpan(span) => match scale_span(&span, base, people) {
            Some(scaled) => DisplayValue::Text(format!("{}{}{}", span.prefix, scaled, span.suffix)),
            None => annotate(amount, base, people),
        },
        AmountShape::FreeText(_) | AmountShape::Placeholder => DisplayValue::original(amount),
        AmountShape::MixedGlyph(_) | AmountShape::Malformed => annotate(amount, base, people),
    }
}

/// Prefix the amount with the scale factor, unless the factor is one.
fn annotate(amount: &IngredientAmount, base: Servings, people: Servings) -> DisplayValue {
    let ratio = scale_ratio(base, people);
    if ratio == "1" {
        DisplayValue::original(amount)
    } else {
        DisplayValue::Text(format!("{} * {}", ratio, amount))
    }
}

fn replace_glyphs(text: &str, base: Servings, people: Servings) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match glyph::glyph_value(c) {
            Some((numerator, denominator)) => {
                match scale_fraction(numerator, denominator, base.as_u64(), people.as_u64()) {
                    Some(scaled) => out.push_str(&scaled),
                    None => out.push(c),
                }
            }
            None => {
                if c == ZERO_THIRDS {
                    tracing::debug!(glyph = %c, "Fraction glyph has no value, left as is");
                }
                out.push(c);
            }
        }
    }
    out
}

fn scale_span(span: &NumericSpan<'_>, base: Servings, people: Servings) -> Option<String> {
    match span.value {
        SpanValue::Fraction { numerator, denominator } => {
            scale_fraction(numerator, denominator, base.as_u64(), people.as_u64())
        }
        SpanValue::Decimal(value) => Some(format_decimal(
            value * f64::from(people.get()) / f64::from(base.get()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn servings(n: u32) -> Servings {
        Servings::new(n).unwrap()
    }

    fn run(amount: impl Into<IngredientAmount>, base: u32, people: u32) -> DisplayValue {
        convert(&amount.into(), servings(base), servings(people))
    }

    fn text(s: &str) -> DisplayValue {
        DisplayValue::Text(s.to_string())
    }

    #[test]
    fn test_integer_scale_up() {
        assert_eq!(run(1i64, 2, 4), text("2"));
    }

    #[test]
    fn test_integer_to_proper_fraction() {
        assert_eq!(run(1i64, 3, 2), text("2/3"));
    }

    #[test]
    fn test_integer_is_reduced_before_formatting() {
        // 2 * 1 / 4 would read "2/4" without reduction
        assert_eq!(run(1i64, 4, 2), text("1/2"));
        assert_eq!(run(2i64, 5, 1), text("2/5"));
        assert_eq!(run(5i64, 1, 2), text("10"));
    }

    #[test]
    fn test_integer_to_decimal() {
        assert_eq!(run(3i64, 4, 2), text("1.5"));
        assert_eq!(run(0i64, 2, 5), text("0"));
    }

    #[test]
    fn test_integer_identity() {
        assert_eq!(run(6i64, 3, 3), text("6"));
    }

    #[test]
    fn test_integer_overflow_is_annotated() {
        assert_eq!(run(i64::MAX, 1, 3), text("3 * 9223372036854775807"));
    }

    #[test]
    fn test_placeholder_unchanged() {
        assert_eq!(run(-1i64, 2, 4), text("-1"));
    }

    #[test]
    fn test_float_passthrough() {
        assert_eq!(run(1.5f64, 2, 4), DisplayValue::Number(3.0));
        assert_eq!(run(0.1f64, 3, 3), DisplayValue::Number(0.1));
    }

    #[test]
    fn test_whole_float_scales_as_count() {
        let amount: IngredientAmount = serde_json::from_str("2.0").unwrap();
        assert_eq!(convert(&amount, servings(3), servings(1)), text("2/3"));
        assert_eq!(run(4.0f64, 2, 3), text("6"));
    }

    #[test]
    fn test_text_fraction_span() {
        assert_eq!(run("1/2", 2, 1), text("1/4"));
        assert_eq!(run("about 3/4 cup", 1, 2), text("about 1.5 cup"));
    }

    #[test]
    fn test_text_decimal_span() {
        assert_eq!(run("200 g flour", 4, 2), text("100 g flour"));
        assert_eq!(run("1,5 dl milk", 2, 3), text("2.25 dl milk"));
        assert_eq!(run("ca. 2.5 kg", 2, 1), text("ca. 1.25 kg"));
    }

    #[test]
    fn test_only_first_span_scaled() {
        assert_eq!(run("2-3 eggs", 1, 2), text("4-3 eggs"));
    }

    #[test]
    fn test_free_text_unchanged() {
        assert_eq!(run("pinch of salt", 2, 4), text("pinch of salt"));
    }

    #[test]
    fn test_glyph_only() {
        assert_eq!(run("½", 2, 4), text("1"));
        assert_eq!(run("¾", 2, 3), text("1.13"));
    }

    #[test]
    fn test_multiple_glyphs() {
        assert_eq!(run("½ cup and ¼ tsp", 1, 2), text("1 cup and 1/2 tsp"));
    }

    #[test]
    fn test_zero_thirds_left_in_place() {
        assert_eq!(run("↉", 1, 2), text("↉"));
        assert_eq!(run("⅓ ↉", 1, 3), text("1 ↉"));
    }

    #[test]
    fn test_mixed_glyph_is_annotated() {
        assert_eq!(run("1 ½", 2, 4), text("2 * 1 ½"));
        assert_eq!(run("1 ½", 4, 2), text("1/2 * 1 ½"));
    }

    #[test]
    fn test_malformed_is_annotated() {
        assert_eq!(run("1/0 cup", 2, 4), text("2 * 1/0 cup"));
        assert_eq!(run(f64::INFINITY, 2, 3), text("1.5 * inf"));
    }

    #[test]
    fn test_overflowing_digits_are_annotated() {
        let amount = format!("1{} g", "0".repeat(400));
        assert_eq!(run(amount.as_str(), 1, 2), text(&format!("2 * {}", amount)));
    }

    #[test]
    fn test_text_identity_is_verbatim() {
        assert_eq!(run("1.50 cups", 2, 2), text("1.50 cups"));
        assert_eq!(run("1 ½", 4, 4), text("1 ½"));
    }

    #[test]
    fn test_scale_ratio() {
        assert_eq!(scale_ratio(servings(2), servings(4)), "2");
        assert_eq!(scale_ratio(servings(3), servings(3)), "1");
        assert_eq!(scale_ratio(servings(2), servings(3)), "1.5");
    }

    #[test]
    fn test_display_value_serialization() {
        assert_eq!(serde_json::to_string(&text("1/2")).unwrap(), r#""1/2""#);
        assert_eq!(serde_json::to_string(&DisplayValue::Number(1.5)).unwrap(), "1.5");
        assert_eq!(DisplayValue::Number(3.0).to_string(), "3");
    }

    proptest! {
        #[test]
        fn prop_integer_identity(n in 0i64..100_000, base in 1u32..50) {
            prop_assert_eq!(run(n, base, base), DisplayValue::Text(n.to_string()));
        }

        #[test]
        fn prop_text_identity(amount in "\\PC*", base in 1u32..50) {
            prop_assert_eq!(run(amount.as_str(), base, base), DisplayValue::Text(amount.clone()));
        }

        #[test]
        fn prop_convert_is_deterministic(amount in "\\PC*", base in 1u32..20, people in 1u32..20) {
            prop_assert_eq!(run(amount.as_str(), base, people), run(amount.as_str(), base, people));
        }

        #[test]
        fn prop_free_text_never_changes(amount in "[a-z ]*", base in 1u32..20, people in 1u32..20) {
            prop_assert_eq!(run(amount.as_str(), base, people), DisplayValue::Text(amount.clone()));
        }
    }
}
