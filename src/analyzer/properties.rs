//! Derived string properties

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::hash::content_hash;
use super::normalize::{is_palindrome, normalize};

/// The fixed set of properties derived from a stored string.
///
/// All fields are pure functions of the value. Recomputing them for the
/// same value always reproduces the same result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of characters (Unicode scalars, not bytes)
    pub length: usize,

    /// Whether the normalized form reads the same in both directions
    pub is_palindrome: bool,

    /// Count of distinct characters of the normalized form
    /// (ASCII letters and digits only, lowercased)
    pub unique_characters: usize,

    /// Number of whitespace-delimited non-empty tokens in the raw value
    pub word_count: usize,

    /// Lowercase hex SHA-256 of the value's UTF-8 bytes; the record's
    /// external identifier
    pub content_hash: String,
}

impl StringProperties {
    /// Compute all properties for the given text.
    pub fn compute(text: &str) -> Self {
        let normalized = normalize(text);
        let unique: HashSet<char> = normalized.chars().collect();

        Self {
            length: text.chars().count(),
            is_palindrome: is_palindrome(text),
            unique_characters: unique.len(),
            word_count: text.split_whitespace().count(),
            content_hash: content_hash(text),
        }
    }
}
