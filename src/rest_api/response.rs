//! # Response Formatting
//!
//! Standard response types for the string API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzer::{character_frequency, StringProperties};
use crate::query::StringFilter;
use crate::store::AnalyzedRecord;

/// Canonical single-record shape: `{id, value, properties, created_at}`
/// with `id = content_hash`.
#[derive(Debug, Clone, Serialize)]
pub struct RecordBody {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl From<&AnalyzedRecord> for RecordBody {
    fn from(record: &AnalyzedRecord) -> Self {
        Self {
            id: record.content_hash().to_string(),
            value: record.value.clone(),
            properties: record.properties.clone(),
            created_at: record.created_at,
        }
    }
}

/// Properties extended with the creation-time character frequency map.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedProperties {
    #[serde(flatten)]
    pub properties: StringProperties,
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// Creation response: the canonical shape plus the frequency map.
#[derive(Debug, Clone, Serialize)]
pub struct CreateResponse {
    pub id: String,
    pub value: String,
    pub properties: CreatedProperties,
    pub created_at: DateTime<Utc>,
}

impl From<&AnalyzedRecord> for CreateResponse {
    fn from(record: &AnalyzedRecord) -> Self {
        Self {
            id: record.content_hash().to_string(),
            value: record.value.clone(),
            properties: CreatedProperties {
                properties: record.properties.clone(),
                character_frequency_map: character_frequency(&record.value),
            },
            created_at: record.created_at,
        }
    }
}

/// List response for the direct filter endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub data: Vec<RecordBody>,
    pub count: usize,
    pub filters_applied: StringFilter,
}

impl ListResponse {
    pub fn new(records: &[AnalyzedRecord], filters_applied: StringFilter) -> Self {
        let data: Vec<RecordBody> = records.iter().map(RecordBody::from).collect();
        let count = data.len();
        Self {
            data,
            count,
            filters_applied,
        }
    }
}

/// The interpreter's account of what it understood.
#[derive(Debug, Clone, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: StringFilter,
}

/// List response for the natural-language endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<RecordBody>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

impl NaturalLanguageResponse {
    pub fn new(records: &[AnalyzedRecord], original: String, parsed_filters: StringFilter) -> Self {
        let data: Vec<RecordBody> = records.iter().map(RecordBody::from).collect();
        let count = data.len();
        Self {
            data,
            count,
            interpreted_query: InterpretedQuery {
                original,
                parsed_filters,
            },
        }
    }
}

/// Bulk delete response
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAllResponse {
    pub count: usize,
}
