//! # Natural Language Query Interpreter
//!
//! Translates a free-text query into a `StringFilter` through a fixed,
//! ordered table of pattern rules. This is a heuristic keyword matcher,
//! not an NLP system: no grammar, no disambiguation.
//!
//! Matching is case-insensitive (the query is lowercased once) and
//! order-independent with respect to the query text. Rules are evaluated
//! in table order against the whole query; a later rule that targets a
//! field an earlier rule already set overwrites it. Unmatched text is
//! silently ignored.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::filter::StringFilter;

/// A single interpretation rule: a pattern and the field transform it
/// applies when the pattern matches.
struct Rule {
    name: &'static str,
    pattern: &'static str,
    apply: fn(&mut StringFilter, &Captures),
}

/// The rule table, in evaluation order. Order is part of the contract:
/// "exactly N words" overrides "single word", "at least N characters"
/// overrides "longer than N characters", "less than" overrides "shorter
/// than", and "exactly N characters" overrides every length bound.
const RULES: &[Rule] = &[
    Rule {
        name: "palindrome",
        // Stem match: palindrome, palindromes, palindromic
        pattern: r"palindrom",
        apply: |filter, _| filter.is_palindrome = Some(true),
    },
    Rule {
        name: "single_word",
        pattern: r"\b(?:single word|only one word|one word)\b",
        apply: |filter, _| filter.word_count = Some(1),
    },
    Rule {
        name: "exact_word_count",
        pattern: r"exactly (\d+) words?",
        apply: |filter, caps| {
            if let Some(n) = capture_number(caps) {
                filter.word_count = Some(n);
            }
        },
    },
    Rule {
        name: "min_word_count",
        pattern: r"at least (\d+) words?",
        apply: |filter, caps| {
            if let Some(n) = capture_number(caps) {
                filter.min_word_count = Some(n);
            }
        },
    },
    Rule {
        name: "max_word_count",
        pattern: r"(?:no more than|at most|no greater than) (\d+) words?",
        apply: |filter, caps| {
            if let Some(n) = capture_number(caps) {
                filter.max_word_count = Some(n);
            }
        },
    },
    Rule {
        name: "longer_than",
        // Strictly longer: the bound is exclusive, so min_length is N + 1
        pattern: r"(?:longer than|more than|greater than) (\d+) characters?",
        apply: |filter, caps| {
            if let Some(n) = capture_number(caps) {
                filter.min_length = Some(n.saturating_add(1));
            }
        },
    },
    Rule {
        name: "at_least_characters",
        pattern: r"at least (\d+) characters?",
        apply: |filter, caps| {
            if let Some(n) = capture_number(caps) {
                filter.min_length = Some(n);
            }
        },
    },
    Rule {
        name: "shorter_than",
        pattern: r"shorter than (\d+) characters?",
        apply: |filter, caps| {
            if let Some(n) = capture_number(caps) {
                filter.max_length = Some(n.saturating_sub(1));
            }
        },
    },
    Rule {
        name: "less_than",
        pattern: r"(?:less than|under) (\d+) characters?",
        apply: |filter, caps| {
            if let Some(n) = capture_number(caps) {
                filter.max_length = Some(n.saturating_sub(1));
            }
        },
    },
    Rule {
        name: "exact_length",
        pattern: r"exactly (\d+) characters?",
        apply: |filter, caps| {
            if let Some(n) = capture_number(caps) {
                filter.min_length = Some(n);
                filter.max_length = Some(n);
            }
        },
    },
    Rule {
        name: "contains_letter",
        pattern: r"(?:containing|contains|with) (?:the )?letter (\w)",
        apply: |filter, caps| {
            let ch = caps.get(1).and_then(|m| m.as_str().chars().next());
            if let Some(ch) = ch {
                filter.contains_character = Some(ch);
            }
        },
    },
];

/// Extract the first capture group as a number.
///
/// A capture that overflows `usize` leaves the rule silent.
fn capture_number(caps: &Captures) -> Option<usize> {
    caps.get(1)?.as_str().parse().ok()
}

/// The compiled rule table, built once per process.
fn compiled_rules() -> &'static Vec<(&'static Rule, Regex)> {
    static COMPILED: OnceLock<Vec<(&'static Rule, Regex)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .map(|rule| {
                let regex = Regex::new(rule.pattern)
                    .unwrap_or_else(|e| panic!("invalid rule pattern '{}': {}", rule.name, e));
                (rule, regex)
            })
            .collect()
    })
}

/// Interpret a free-text query into a structured filter.
///
/// Pure and deterministic; never fails. A query that matches nothing
/// yields an empty filter.
pub fn interpret(query: &str) -> StringFilter {
    let lowered = query.to_lowercase();
    let mut filter = StringFilter::none();

    for (rule, regex) in compiled_rules() {
        if let Some(caps) = regex.captures(&lowered) {
            (rule.apply)(&mut filter, &caps);
        }
    }

    filter
}
