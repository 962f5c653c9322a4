//! Request logging middleware
//!
//! Every HTTP request gets a generated request id and one structured log
//! line recording method, path, status, and duration.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use super::logger::{Logger, Severity};

/// Axum middleware: log one event per request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(request).await;
    let duration_ms = start.elapsed().as_millis().to_string();

    let status = response.status();
    let severity = if status.is_server_error() {
        Severity::Error
    } else if status.is_client_error() {
        Severity::Warn
    } else {
        Severity::Info
    };

    Logger::log(
        severity,
        "http_request",
        &[
            ("duration_ms", &duration_ms),
            ("method", &method),
            ("path", &path),
            ("request_id", &request_id.to_string()),
            ("status", status.as_str()),
        ],
    );

    response
}
