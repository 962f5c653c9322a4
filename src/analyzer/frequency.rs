//! Character frequency map
//!
//! A creation-time artifact: the map from each distinct character of the
//! raw text to its occurrence count. Case-sensitive, computed over the
//! original (non-normalized) text, never persisted.

use std::collections::BTreeMap;

/// Count occurrences of each character in the raw text.
///
/// Returns a `BTreeMap` so the serialized map has deterministic key order.
pub fn character_frequency(text: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}
