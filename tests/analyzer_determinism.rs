//! Analyzer Determinism Tests
//!
//! Tests for analyzer invariants:
//! - Every derived property is a pure function of the value
//! - The content hash is stable across repeated calls
//! - Character length is Unicode-aware, never byte length

use stringdb::analyzer::{analyze, content_hash};
use stringdb::store::AnalyzedRecord;

// =============================================================================
// Content Hash Tests
// =============================================================================

/// The hash never varies across repeated calls.
#[test]
fn test_content_hash_stable_across_calls() {
    let first = content_hash("determinism matters");
    for _ in 0..100 {
        assert_eq!(content_hash("determinism matters"), first);
    }
}

/// The hash is a function of the bytes alone, reproducible anywhere.
#[test]
fn test_content_hash_known_value() {
    assert_eq!(
        content_hash("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

/// Distinct values produce distinct hashes.
#[test]
fn test_content_hash_distinguishes_values() {
    assert_ne!(content_hash("left"), content_hash("right"));
    assert_ne!(content_hash("a"), content_hash("a "));
}

// =============================================================================
// Property Tests
// =============================================================================

/// Palindrome detection normalizes punctuation and case.
#[test]
fn test_palindrome_examples() {
    assert!(analyze("racecar").is_palindrome);
    assert!(analyze("Race Car!").is_palindrome);
    assert!(!analyze("hello").is_palindrome);
}

/// Word count collapses runs of whitespace.
#[test]
fn test_word_count_example() {
    assert_eq!(analyze("  a  b   c ").word_count, 3);
}

/// Length counts characters, not bytes.
#[test]
fn test_length_is_character_count() {
    assert_eq!(analyze("héllo").length, 5);
    assert_eq!("héllo".len(), 6); // the byte length this must not be
}

/// Repeated analysis always produces identical results.
#[test]
fn test_analysis_is_pure() {
    let inputs = ["", "x", "Race Car!", "many words in a row", "héllo wörld"];
    for input in inputs {
        assert_eq!(analyze(input), analyze(input));
    }
}

// =============================================================================
// Record Construction Tests
// =============================================================================

/// A record's stored properties equal a fresh analysis of its value.
#[test]
fn test_record_properties_match_analysis() {
    let record = AnalyzedRecord::new("A man, a plan, a canal: Panama".to_string());
    assert_eq!(record.properties, analyze(&record.value));
    assert!(record.properties.is_palindrome);
}
