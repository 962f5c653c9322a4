//! Observability for stringdb
//!
//! Structured JSON logging plus per-request instrumentation.
//!
//! # Principles
//!
//! 1. Observability is read-only: no side effects on request handling
//! 2. No async or background threads; log writes are synchronous
//! 3. Deterministic output (stable key ordering)
//! 4. Logging failure must never fail a request

mod logger;
mod middleware;

pub use logger::{Logger, Severity};
pub use middleware::log_requests;
