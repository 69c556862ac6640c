//! Unicode vulgar fraction glyphs.

/// Glyphs with a known value, as `(glyph, numerator, denominator)`.
pub const GLYPHS: [(char, u64, u64); 18] = [
    ('½', 1, 2),
    ('⅓', 1, 3),
    ('⅕', 1, 5),
    ('⅙', 1, 6),
    ('⅛', 1, 8),
    ('⅔', 2, 3),
    ('⅖', 2, 5),
    ('⅚', 5, 6),
    ('⅜', 3, 8),
    ('¾', 3, 4),
    ('⅗', 3, 5),
    ('⅝', 5, 8),
    ('⅞', 7, 8),
    ('⅘', 4, 5),
    ('¼', 1, 4),
    ('⅐', 1, 7),
    ('⅑', 1, 9),
    ('⅒', 1, 10),
];

/// U+2189 VULGAR FRACTION ZERO THIRDS.
///
/// Recognised as a fraction glyph when classifying an amount, but it has no
/// value and is never rewritten.
pub const ZERO_THIRDS: char = '↉';

/// Numerator and denominator of a glyph, if it has a value.
pub fn glyph_value(c: char) -> Option<(u64, u64)> {
    GLYPHS
        .iter()
        .find(|(glyph, _, _)| *glyph == c)
        .map(|&(_, numerator, denominator)| (numerator, denominator))
}

/// Whether `c` is a recognised fraction glyph.
#[inline]
pub fn is_glyph(c: char) -> bool {
    c == ZERO_THIRDS || glyph_value(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(glyph_value('½'), Some((1, 2)));
        assert_eq!(glyph_value('⅚'), Some((5, 6)));
        assert_eq!(glyph_value('⅒'), Some((1, 10)));
    }

    #[test]
    fn test_zero_thirds_is_recognised_without_value() {
        assert!(is_glyph(ZERO_THIRDS));
        assert_eq!(glyph_value(ZERO_THIRDS), None);
    }

    #[test]
    fn test_plain_characters() {
        assert!(!is_glyph('1'));
        assert!(!is_glyph('/'));
        assert!(!is_glyph('a'));
    }

    #[test]
    fn test_table_is_proper() {
        for (glyph, numerator, denominator) in GLYPHS {
            assert!(numerator < denominator, "{} is not a proper fraction", glyph);
        }
    }
}
