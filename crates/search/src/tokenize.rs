//! Query and item text normalisation.

/// Lowercase and split on runs of whitespace.
///
/// Leading and trailing whitespace never produce empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(tokenize("Creamy Chicken  Soup"), ["creamy", "chicken", "soup"]);
    }

    #[test]
    fn test_trims_and_collapses_whitespace() {
        assert_eq!(tokenize("  \tpasta \n bake  "), ["pasta", "bake"]);
    }

    #[test]
    fn test_blank_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n").is_empty());
    }

    #[test]
    fn test_keeps_punctuation() {
        assert_eq!(tokenize("Mac & Cheese!"), ["mac", "&", "cheese!"]);
    }
}
