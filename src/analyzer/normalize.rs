//! Palindrome normalization
//!
//! The palindrome check and the unique-character count both operate on a
//! normalized form: every character that is not an ASCII letter or digit
//! is removed, and the remainder is lowercased. An empty normalized form
//! is trivially a palindrome.

/// Build the normalized form of a string.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Check whether the normalized form reads the same in both directions.
pub fn is_palindrome(text: &str) -> bool {
    let normalized = normalize(text);
    let reversed: String = normalized.chars().rev().collect();
    normalized == reversed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("Race Car!"), "racecar");
        assert_eq!(normalize("A man, a plan"), "amanaplan");
    }

    #[test]
    fn test_normalize_drops_non_ascii() {
        // Only ASCII letters and digits survive normalization
        assert_eq!(normalize("héllo"), "hllo");
    }

    #[test]
    fn test_palindrome_ignores_punctuation() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("Race Car!"));
        assert!(!is_palindrome("hello"));
    }

    #[test]
    fn test_empty_normalized_form_is_palindrome() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("!!! ???"));
    }
}
