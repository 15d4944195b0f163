//! Single-word answer extraction

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not a Unicode letter or number
static NON_WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]").unwrap());

/// Reduce raw model output to its first word
///
/// Takes the first whitespace-delimited token and strips every character that
/// is not a letter or digit. Returns `None` when nothing remains.
pub fn extract_single_word(text: &str) -> Option<String> {
    let first = text.split_whitespace().next()?;
    let word = NON_WORD_PATTERN.replace_all(first, "");
    if word.is_empty() {
        None
    } else {
        Some(word.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_token_only() {
        assert_eq!(
            extract_single_word("Paris is the capital").as_deref(),
            Some("Paris")
        );
        assert_eq!(
            extract_single_word("  \n Paris. is the capital").as_deref(),
            Some("Paris")
        );
    }

    #[test]
    fn test_strips_punctuation_and_markup() {
        assert_eq!(extract_single_word("**Paris**.").as_deref(), Some("Paris"));
        assert_eq!(extract_single_word("\"42\"").as_deref(), Some("42"));
        assert_eq!(extract_single_word("don't").as_deref(), Some("dont"));
    }

    #[test]
    fn test_keeps_non_ascii_letters() {
        assert_eq!(extract_single_word("Café,").as_deref(), Some("Café"));
        assert_eq!(extract_single_word("東京。").as_deref(), Some("東京"));
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(extract_single_word(""), None);
        assert_eq!(extract_single_word("   \t\n"), None);
        assert_eq!(extract_single_word("...! Paris"), None);
    }
}
