//! # Filter Model
//!
//! A `StringFilter` holds the optional constraints a retrieval may apply.
//! Unset fields do not constrain. All set fields combine with AND logic.

use serde::Serialize;

use crate::store::AnalyzedRecord;

/// A set of optional constraints over analyzed records.
///
/// Serialization emits `null` for unset fields, which is the wire shape of
/// `parsed_filters` and `filters_applied` in list responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StringFilter {
    /// Exact match on the palindrome flag
    pub is_palindrome: Option<bool>,

    /// Inclusive lower bound on character length
    pub min_length: Option<usize>,

    /// Inclusive upper bound on character length
    pub max_length: Option<usize>,

    /// Exact match on word count
    pub word_count: Option<usize>,

    /// Inclusive lower bound on word count
    pub min_word_count: Option<usize>,

    /// Inclusive upper bound on word count
    pub max_word_count: Option<usize>,

    /// Case-insensitive containment test on the raw value
    pub contains_character: Option<char>,
}

impl StringFilter {
    /// A filter with no constraints; matches every record.
    pub fn none() -> Self {
        Self::default()
    }

    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check whether a record satisfies every set constraint.
    pub fn matches(&self, record: &AnalyzedRecord) -> bool {
        let props = &record.properties;

        if let Some(want) = self.is_palindrome {
            if props.is_palindrome != want {
                return false;
            }
        }

        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }

        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }

        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }

        if let Some(min) = self.min_word_count {
            if props.word_count < min {
                return false;
            }
        }

        if let Some(max) = self.max_word_count {
            if props.word_count > max {
                return false;
            }
        }

        if let Some(ch) = self.contains_character {
            if !contains_char_insensitive(&record.value, ch) {
                return false;
            }
        }

        true
    }
}

/// Case-insensitive single-character containment test.
fn contains_char_insensitive(value: &str, ch: char) -> bool {
    let needle: String = ch.to_lowercase().collect();
    value.to_lowercase().contains(&needle)
}
