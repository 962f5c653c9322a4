//! # HTTP Server
//!
//! Axum router construction and startup for the string API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServiceConfig;
use crate::observability::{log_requests, Logger, Severity};
use crate::store::StringStore;

use super::handlers::{
    create_string, delete_all_strings, delete_string, filter_by_natural_language, get_string,
    list_strings, ApiState,
};

/// HTTP server for the string API.
pub struct ApiServer {
    config: ServiceConfig,
    state: Arc<ApiState>,
}

impl ApiServer {
    /// Create a server over the given store and configuration.
    pub fn new(store: Arc<dyn StringStore>, config: ServiceConfig) -> Self {
        let state = Arc::new(ApiState::new(store, config.max_value_bytes));
        Self { config, state }
    }

    /// Build the Axum router.
    pub fn router(&self) -> Router {
        // Configure CORS: no configured origins means permissive (the
        // development posture)
        let cors = if self.config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        // The body limit sits above the value cap: JSON escaping can
        // double the payload, and the 422 path should report oversized
        // values, not a generic 413.
        let body_limit = self
            .config
            .max_value_bytes
            .saturating_mul(2)
            .saturating_add(1024);

        Router::new()
            .route(
                "/strings",
                get(list_strings)
                    .post(create_string)
                    .delete(delete_all_strings),
            )
            .route(
                "/strings/filter-by-natural-language",
                get(filter_by_natural_language),
            )
            .route("/strings/:value", get(get_string).delete(delete_string))
            .layer(middleware::from_fn(log_requests))
            .layer(cors)
            .layer(DefaultBodyLimit::max(body_limit))
            .with_state(self.state.clone())
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address: {}", e),
            )
        })?;

        let router = self.router();

        Logger::log(
            Severity::Info,
            "server_started",
            &[("addr", &addr.to_string())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
