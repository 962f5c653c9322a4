//! Analyzed record type
//!
//! A record is immutable once created: the value, its derived properties,
//! and the creation timestamp never change. Destruction happens only
//! through explicit deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::{analyze, StringProperties};

/// A stored string together with its derived properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    /// The original string, unique across the store
    pub value: String,

    /// Properties derived from the value at creation time
    pub properties: StringProperties,

    /// Insertion timestamp, never mutated
    pub created_at: DateTime<Utc>,
}

impl AnalyzedRecord {
    /// Create a record, computing all derived properties from the value.
    ///
    /// Properties are never caller-supplied; this constructor is the only
    /// way to build a record.
    pub fn new(value: String) -> Self {
        let properties = analyze(&value);
        Self {
            value,
            properties,
            created_at: Utc::now(),
        }
    }

    /// The record's external identifier.
    pub fn content_hash(&self) -> &str {
        &self.properties.content_hash
    }
}
