//! Create-request parsing
//!
//! The body is parsed by hand from the raw string rather than through an
//! extractor, so every failure mode produces the uniform error body:
//! malformed JSON or a missing `value` key is 400, while a present but
//! invalid value (wrong type, empty, oversized) is 422.

use serde_json::Value;

use super::errors::{ApiError, ApiResult};

/// Validated create request.
#[derive(Debug, Clone)]
pub struct CreateStringRequest {
    pub value: String,
}

impl CreateStringRequest {
    /// Parse and validate a raw request body.
    ///
    /// `max_value_bytes` bounds the UTF-8 byte length of `value`.
    pub fn parse(body: &str, max_value_bytes: usize) -> ApiResult<Self> {
        let raw: Value = serde_json::from_str(body)
            .map_err(|e| ApiError::InvalidBody(format!("Invalid JSON: {}", e)))?;

        let object = raw
            .as_object()
            .ok_or_else(|| ApiError::InvalidBody("Expected a JSON object".to_string()))?;

        let value = object
            .get("value")
            .ok_or_else(|| ApiError::MissingField("value".to_string()))?;

        let value = value
            .as_str()
            .ok_or_else(|| ApiError::unprocessable("'value' must be a string"))?;

        if value.is_empty() {
            return Err(ApiError::unprocessable("'value' must not be empty"));
        }

        if value.len() > max_value_bytes {
            return Err(ApiError::unprocessable(format!(
                "'value' exceeds the maximum size of {} bytes",
                max_value_bytes
            )));
        }

        Ok(Self {
            value: value.to_string(),
        })
    }
}
