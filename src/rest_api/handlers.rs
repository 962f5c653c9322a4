//! # Endpoint Handlers
//!
//! Maps the HTTP surface onto the analyzer, the query interpreter, and
//! the record store. Handlers hold no state of their own; everything
//! flows through `ApiState`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::observability::{Logger, Severity};
use crate::query::{interpret, StringFilter};
use crate::store::{AnalyzedRecord, StringStore};

use super::errors::{ApiError, ApiResult};
use super::parser::parse_filter_params;
use super::request::CreateStringRequest;
use super::response::{
    CreateResponse, DeleteAllResponse, ListResponse, NaturalLanguageResponse, RecordBody,
};

/// Shared handler state.
pub struct ApiState {
    pub store: Arc<dyn StringStore>,
    pub max_value_bytes: usize,
}

impl ApiState {
    pub fn new(store: Arc<dyn StringStore>, max_value_bytes: usize) -> Self {
        Self {
            store,
            max_value_bytes,
        }
    }
}

/// POST /strings — analyze and store a new string.
///
/// The body is taken raw so validation failures produce the uniform
/// error shape instead of an extractor rejection.
pub async fn create_string(
    State(state): State<Arc<ApiState>>,
    body: String,
) -> ApiResult<(StatusCode, Json<CreateResponse>)> {
    let request = CreateStringRequest::parse(&body, state.max_value_bytes)?;

    let record = state.store.insert(AnalyzedRecord::new(request.value))?;

    Logger::log(
        Severity::Info,
        "string_created",
        &[("content_hash", record.content_hash())],
    );

    Ok((StatusCode::CREATED, Json(CreateResponse::from(&record))))
}

/// GET /strings — list records, optionally filtered by query parameters.
pub async fn list_strings(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ListResponse>> {
    let filter = parse_filter_params(&params)?;
    let records = state.store.list(&filter)?;

    Ok(Json(ListResponse::new(&records, filter)))
}

/// DELETE /strings — delete every record, reporting how many went.
pub async fn delete_all_strings(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<DeleteAllResponse>> {
    let count = state.store.clear()?;

    Logger::log(
        Severity::Info,
        "store_cleared",
        &[("count", &count.to_string())],
    );

    Ok(Json(DeleteAllResponse { count }))
}

/// GET /strings/:value — exact-value lookup.
pub async fn get_string(
    State(state): State<Arc<ApiState>>,
    Path(value): Path<String>,
) -> ApiResult<Json<RecordBody>> {
    let record = state.store.get(&value)?;
    Ok(Json(RecordBody::from(&record)))
}

/// DELETE /strings/:value — delete one record.
pub async fn delete_string(
    State(state): State<Arc<ApiState>>,
    Path(value): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.remove(&value)?;

    Logger::log(Severity::Info, "string_deleted", &[]);

    Ok(StatusCode::NO_CONTENT)
}

/// GET /strings/filter-by-natural-language — interpret a free-text query
/// and apply the resulting filter.
pub async fn filter_by_natural_language(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<NaturalLanguageResponse>> {
    let query = params
        .get("query")
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::MissingParam("query".to_string()))?;

    let filter: StringFilter = interpret(query);
    let records = state.store.list(&filter)?;

    Ok(Json(NaturalLanguageResponse::new(
        &records,
        query.clone(),
        filter,
    )))
}
