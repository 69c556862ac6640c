//! Fraction reduction and display formatting.
//!
//! Amounts are shown the way a cook would write them: whole numbers stay
//! whole, proper fractions stay fractions, and anything larger than one that
//! is not whole becomes a two-decimal number.

/// Greatest common divisor via the Euclidean algorithm.
///
/// `gcd(0, 0)` is `0`.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Reduce a fraction to lowest terms.
///
/// `reduce(0, 0)` has no greatest common divisor to divide by and is
/// returned unreduced as `(0, 0)`.
///
/// # Example
/// ```
/// use cookbook_scaling::reduce;
///
/// assert_eq!(reduce(18, 3), (6, 1));
/// assert_eq!(reduce(0, 0), (0, 0));
/// ```
pub fn reduce(numerator: u64, denominator: u64) -> (u64, u64) {
    match gcd(numerator, denominator) {
        0 => (numerator, denominator),
        divisor => (numerator / divisor, denominator / divisor),
    }
}

/// Format a fraction for display.
///
/// The fraction is shown as given; call [`reduce`] first.
///
/// | Case | Output |
/// |------|--------|
/// | `d == 1` | `"n"` |
/// | `n == d` | `"1"` |
/// | `n < d` | `"n/d"` |
/// | otherwise | `n / d` rounded to two decimals |
pub fn format_frac(numerator: u64, denominator: u64) -> String {
    if denominator == 1 {
        numerator.to_string()
    } else if numerator == denominator {
        "1".to_string()
    } else if numerator < denominator {
        format!("{}/{}", numerator, denominator)
    } else {
        format_decimal(numerator as f64 / denominator as f64)
    }
}

/// Round to two decimal places, halves away from zero.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to two decimals and render without trailing zeros.
///
/// ```
/// use cookbook_scaling::format_decimal;
///
/// assert_eq!(format_decimal(2.0), "2");
/// assert_eq!(format_decimal(10.0 / 3.0), "3.33");
/// ```
pub fn format_decimal(value: f64) -> String {
    round2(value).to_string()
}

/// Scale `numerator/denominator` by `people/base` and format the result.
///
/// Returns `None` if the scaled terms do not fit in a `u64`.
pub(crate) fn scale_fraction(numerator: u64, denominator: u64, base: u64, people: u64) -> Option<String> {
    let scaled_numerator = people.checked_mul(numerator)?;
    let scaled_denominator = base.checked_mul(denominator)?;
    let (n, d) = reduce(scaled_numerator, scaled_denominator);
    Some(format_frac(n, d))
}
