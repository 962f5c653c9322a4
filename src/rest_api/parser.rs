//! # Filter Parameter Parser
//!
//! Parses the direct filter query parameters of `GET /strings` into a
//! `StringFilter`. Malformed values are client errors (422), never
//! silently ignored: a filter that fails to parse must not widen the
//! result set. Unknown parameters are ignored.

use std::collections::HashMap;

use crate::query::StringFilter;

use super::errors::{ApiError, ApiResult};

/// Parse filter query parameters from a key/value map.
pub fn parse_filter_params(params: &HashMap<String, String>) -> ApiResult<StringFilter> {
    let mut filter = StringFilter::none();

    for (key, value) in params {
        match key.as_str() {
            "is_palindrome" => {
                filter.is_palindrome = Some(parse_bool(key, value)?);
            }
            "min_length" => {
                filter.min_length = Some(parse_integer(key, value)?);
            }
            "max_length" => {
                filter.max_length = Some(parse_integer(key, value)?);
            }
            "word_count" => {
                filter.word_count = Some(parse_integer(key, value)?);
            }
            "min_word_count" => {
                filter.min_word_count = Some(parse_integer(key, value)?);
            }
            "max_word_count" => {
                filter.max_word_count = Some(parse_integer(key, value)?);
            }
            "contains_character" => {
                filter.contains_character = Some(parse_character(key, value)?);
            }
            _ => {
                // Not a filter parameter
            }
        }
    }

    Ok(filter)
}

/// Parse a boolean parameter; only `true`/`false` (any case) are accepted.
fn parse_bool(key: &str, value: &str) -> ApiResult<bool> {
    match value.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ApiError::unprocessable(format!(
            "Invalid boolean for '{}': '{}'",
            key, value
        ))),
    }
}

/// Parse a non-negative integer parameter.
fn parse_integer(key: &str, value: &str) -> ApiResult<usize> {
    value.parse().map_err(|_| {
        ApiError::unprocessable(format!("Invalid integer for '{}': '{}'", key, value))
    })
}

/// Parse a single-character parameter.
fn parse_character(key: &str, value: &str) -> ApiResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ApiError::unprocessable(format!(
            "'{}' must be a single character, got '{}'",
            key, value
        ))),
    }
}
