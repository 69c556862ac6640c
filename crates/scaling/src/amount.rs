//! Ingredient amounts and their shape classification.
//!
//! Amounts are authored as free text so they can say "1 ½", "200 g" or
//! "a pinch". Before scaling, an amount is classified once into an
//! [`AmountShape`], and the converter dispatches on that.

use crate::glyph;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First `<digits>[<sep><digits>]` run in a text, `<sep>` being `/`, `.` or `,`.
static NUMERIC_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)(?:([/.,])([0-9]+))?").expect("numeric span pattern is valid")
});

/// An ingredient amount as authored.
///
/// Deserialises from a JSON number or string:
///
/// ```
/// use cookbook_scaling::IngredientAmount;
///
/// let amounts: Vec<IngredientAmount> = serde_json::from_str(r#"[2, 1.5, "1 ½ cups"]"#).unwrap();
/// assert_eq!(amounts[0], IngredientAmount::Integer(2));
/// assert_eq!(amounts[1], IngredientAmount::Float(1.5));
/// assert_eq!(amounts[2], IngredientAmount::Text("1 ½ cups".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientAmount {
    /// Whole count
    Integer(i64),
    /// Non-integer count
    Float(f64),
    /// Free text, possibly with numbers or fraction glyphs in it
    Text(String),
}

impl IngredientAmount {
    /// Build an amount from a number, keeping whole values as integers.
    pub fn from_number(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            IngredientAmount::Integer(value as i64)
        } else {
            IngredientAmount::Float(value)
        }
    }

    /// Read user input, treating anything that is a plain number as one.
    ///
    /// ```
    /// use cookbook_scaling::IngredientAmount;
    ///
    /// assert_eq!(IngredientAmount::parse_lenient("3"), IngredientAmount::Integer(3));
    /// assert_eq!(IngredientAmount::parse_lenient(" 0.5 "), IngredientAmount::Float(0.5));
    /// assert_eq!(IngredientAmount::parse_lenient("3 eggs"), IngredientAmount::Text("3 eggs".into()));
    /// ```
    pub fn parse_lenient(input: &str) -> Self {
        let trimmed = input.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return IngredientAmount::Integer(value);
        }
        // "inf" and "NaN" parse as floats but are words here
        let numeric = trimmed.chars().any(|c| c.is_ascii_digit());
        match trimmed.parse::<f64>() {
            Ok(value) if numeric && value.is_finite() => IngredientAmount::from_number(value),
            _ => IngredientAmount::Text(input.to_string()),
        }
    }
}

impl fmt::Display for IngredientAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientAmount::Integer(value) => write!(f, "{}", value),
            IngredientAmount::Float(value) => write!(f, "{}", value),
            IngredientAmount::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for IngredientAmount {
    fn from(value: i64) -> Self {
        IngredientAmount::Integer(value)
    }
}

impl From<f64> for IngredientAmount {
    fn from(value: f64) -> Self {
        IngredientAmount::Float(value)
    }
}

impl From<&str> for IngredientAmount {
    fn from(text: &str) -> Self {
        IngredientAmount::Text(text.to_string())
    }
}

impl From<String> for IngredientAmount {
    fn from(text: String) -> Self {
        IngredientAmount::Text(text)
    }
}

/// The value inside a [`NumericSpan`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpanValue {
    /// `numerator/denominator`, denominator non-zero
    Fraction {
        /// Digits before the slash
        numerator: u64,
        /// Digits after the slash
        denominator: u64,
    },
    /// `whole.fraction` or `whole,fraction` or bare digits
    Decimal(f64),
}

/// Text with one numeric run to be scaled in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSpan<'a> {
    /// Text before the number, kept verbatim
    pub prefix: &'a str,
    /// The parsed number
    pub value: SpanValue,
    /// Text after the number, kept verbatim
    pub suffix: &'a str,
}

/// Classification of an [`IngredientAmount`], in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountShape<'a> {
    /// Non-negative whole count
    Integer(u64),
    /// Finite non-integer count
    Float(f64),
    /// Text with fraction glyphs and no ASCII digits, e.g. `"½ cup"`
    Glyph(&'a str),
    /// Text with fraction glyphs and ASCII digits, e.g. `"1 ½"`
    MixedGlyph(&'a str),
    /// Text without any digits, e.g. `"a pinch"`
    FreeText(&'a str),
    /// Text with a scalable number in it, e.g. `"200 g"`
    NumericSpan(NumericSpan<'a>),
    /// Negative count, written by the recipe form for an empty amount
    Placeholder,
    /// Anything that cannot be scaled numerically
    Malformed,
}

impl AmountShape<'_> {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            AmountShape::Integer(_) => "integer",
            AmountShape::Float(_) => "float",
            AmountShape::Glyph(_) => "glyph",
            AmountShape::MixedGlyph(_) => "mixed_glyph",
            AmountShape::FreeText(_) => "free_text",
            AmountShape::NumericSpan(_) => "numeric_span",
            AmountShape::Placeholder => "placeholder",
            AmountShape::Malformed => "malformed",
        }
    }
}

/// Classify an amount. The first matching shape wins.
///
/// ```
/// use cookbook_scaling::{classify, AmountShape, IngredientAmount};
///
/// let amount = IngredientAmount::from("a pinch");
/// assert_eq!(classify(&amount), AmountShape::FreeText("a pinch"));
/// ```
pub fn classify(amount: &IngredientAmount) -> AmountShape<'_> {
    match amount {
        IngredientAmount::Integer(value) => match u64::try_from(*value) {
            Ok(count) => AmountShape::Integer(count),
            Err(_) => AmountShape::Placeholder,
        },
        IngredientAmount::Float(value) => classify_float(*value),
        IngredientAmount::Text(text) => classify_text(text),
    }
}

/// JSON has one number type, so `2.0` counts as the whole count `2`.
fn classify_float(value: f64) -> AmountShape<'static> {
    if !value.is_finite() {
        return AmountShape::Malformed;
    }
    if value.fract() != 0.0 {
        return AmountShape::Float(value);
    }
    if value < 0.0 {
        AmountShape::Placeholder
    } else if value < u64::MAX as f64 {
        AmountShape::Integer(value as u64)
    } else {
        AmountShape::Malformed
    }
}

fn classify_text(text: &str) -> AmountShape<'_> {
    let has_digit = text.chars().any(|c| c.is_ascii_digit());

    if text.chars().any(glyph::is_glyph) {
        return if has_digit {
            AmountShape::MixedGlyph(text)
        } else {
            AmountShape::Glyph(text)
        };
    }

    if !has_digit {
        return AmountShape::FreeText(text);
    }

    match parse_numeric_span(text) {
        Some(span) => AmountShape::NumericSpan(span),
        None => AmountShape::Malformed,
    }
}

fn parse_numeric_span(text: &str) -> Option<NumericSpan<'_>> {
    let captures = NUMERIC_SPAN.captures(text)?;
    let whole = captures.get(0)?;
    let leading = captures.get(1)?.as_str();

    let value = match (captures.get(2).map(|m| m.as_str()), captures.get(3)) {
        (Some("/"), Some(trailing)) => {
            let numerator = leading.parse::<u64>().ok()?;
            let denominator = trailing.as_str().parse::<u64>().ok()?;
            if denominator == 0 {
                return None;
            }
            SpanValue::Fraction { numerator, denominator }
        }
        (Some(_), Some(trailing)) => SpanValue::Decimal(
            format!("{}.{}", leading, trailing.as_str())
                .parse()
                .ok()
                .filter(|value: &f64| value.is_finite())?,
        ),
        _ => SpanValue::Decimal(leading.parse().ok().filter(|value: &f64| value.is_finite())?),
    };

    Some(NumericSpan {
        prefix: &text[..whole.start()],
        value,
        suffix: &text[whole.end()..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> IngredientAmount {
        IngredientAmount::from(s)
    }

    #[test]
    fn test_classify_numbers() {
        assert_eq!(classify(&IngredientAmount::Integer(4)), AmountShape::Integer(4));
        assert_eq!(classify(&IngredientAmount::Float(0.5)), AmountShape::Float(0.5));
        assert_eq!(classify(&IngredientAmount::Integer(-1)), AmountShape::Placeholder);
        assert_eq!(classify(&IngredientAmount::Float(f64::NAN)), AmountShape::Malformed);
    }

    #[test]
    fn test_classify_glyphs() {
        assert_eq!(classify(&text("½ cup")), AmountShape::Glyph("½ cup"));
        assert_eq!(classify(&text("1 ½")), AmountShape::MixedGlyph("1 ½"));
        assert_eq!(classify(&text("↉")), AmountShape::Glyph("↉"));
    }

    #[test]
    fn test_classify_free_text() {
        assert_eq!(classify(&text("a pinch")), AmountShape::FreeText("a pinch"));
        assert_eq!(classify(&text("")), AmountShape::FreeText(""));
    }

    #[test]
    fn test_non_ascii_digits_are_free_text() {
        assert_eq!(classify(&text("٣ cups")), AmountShape::FreeText("٣ cups"));
    }

    #[test]
    fn test_classify_fraction_span() {
        let amount = text("about 3/4 cup");
        let AmountShape::NumericSpan(span) = classify(&amount) else {
            panic!("expected a numeric span");
        };
        assert_eq!(span.prefix, "about ");
        assert_eq!(span.value, SpanValue::Fraction { numerator: 3, denominator: 4 });
        assert_eq!(span.suffix, " cup");
    }

    #[test]
    fn test_classify_decimal_spans() {
        for (input, expected) in [("1.5 kg", 1.5), ("1,5 dl", 1.5), ("200 g", 200.0)] {
            let amount = text(input);
            let AmountShape::NumericSpan(span) = classify(&amount) else {
                panic!("expected a numeric span for {}", input);
            };
            assert_eq!(span.value, SpanValue::Decimal(expected));
        }
    }

    #[test]
    fn test_only_first_span_is_taken() {
        let amount = text("2-3 eggs");
        let AmountShape::NumericSpan(span) = classify(&amount) else {
            panic!("expected a numeric span");
        };
        assert_eq!(span.value, SpanValue::Decimal(2.0));
        assert_eq!(span.suffix, "-3 eggs");
    }

    #[test]
    fn test_zero_denominator_is_malformed() {
        assert_eq!(classify(&text("1/0 cup")), AmountShape::Malformed);
    }

    #[test]
    fn test_overflowing_fraction_is_malformed() {
        assert_eq!(classify(&text("99999999999999999999999/2")), AmountShape::Malformed);
    }

    #[test]
    fn test_overflowing_decimal_is_malformed() {
        let digits = format!("1{} g", "0".repeat(400));
        assert_eq!(classify(&text(&digits)), AmountShape::Malformed);
        assert_eq!(classify(&text(&format!("{}.5 kg", "9".repeat(400)))), AmountShape::Malformed);
    }

    #[test]
    fn test_whole_floats_classify_as_counts() {
        let amount: IngredientAmount = serde_json::from_str("2.0").unwrap();
        assert_eq!(amount, IngredientAmount::Float(2.0));
        assert_eq!(classify(&amount), AmountShape::Integer(2));
        assert_eq!(classify(&IngredientAmount::Float(0.0)), AmountShape::Integer(0));
        assert_eq!(classify(&IngredientAmount::Float(-1.0)), AmountShape::Placeholder);
        assert_eq!(classify(&IngredientAmount::Float(1e30)), AmountShape::Malformed);
        assert_eq!(classify(&IngredientAmount::Float(f64::INFINITY)), AmountShape::Malformed);
    }

    #[test]
    fn test_from_number_normalises_whole_floats() {
        assert_eq!(IngredientAmount::from_number(2.0), IngredientAmount::Integer(2));
        assert_eq!(IngredientAmount::from_number(2.5), IngredientAmount::Float(2.5));
    }

    #[test]
    fn test_parse_lenient_words() {
        assert_eq!(IngredientAmount::parse_lenient("inf"), text("inf"));
        assert_eq!(IngredientAmount::parse_lenient("1/2"), text("1/2"));
    }

    #[test]
    fn test_display_round_trips_text() {
        assert_eq!(text("1 ½ cups").to_string(), "1 ½ cups");
        assert_eq!(IngredientAmount::Integer(3).to_string(), "3");
        assert_eq!(IngredientAmount::Float(0.25).to_string(), "0.25");
    }
}
