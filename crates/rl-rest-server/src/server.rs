// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Main server implementation

use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handlers;
use crate::state::AppState;

/// REST API server
pub struct Server {
    config: ServerConfig,
    app: Router,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::new(config.clone());
        Self::with_state(config, state)
    }

    /// Construct a server from an already-built app state
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        let app = Self::build_app(state, &config);
        Self { config, app }
    }

    /// Build the Axum application with routes and middleware
    fn build_app(state: AppState, config: &ServerConfig) -> Router {
        let middleware_stack = ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer({
            if config.enable_cors {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new()
                    .allow_origin(vec![
                        HeaderValue::from_static("http://localhost:3000"),
                        HeaderValue::from_static("http://127.0.0.1:3000"),
                    ])
                    .allow_methods([axum::http::Method::GET])
                    .allow_headers([
                        axum::http::header::AUTHORIZATION,
                        axum::http::header::CONTENT_TYPE,
                    ])
            }
        });

        let api_routes = Router::new()
            // Health and status endpoints
            .route("/healthz", get(handlers::health::health_check))
            .route("/version", get(handlers::health::version))
            // Repository queries
            .route(
                "/repositories",
                get(handlers::repositories::list_repositories),
            )
            .route(
                "/repositories/:owner/:name",
                get(handlers::repositories::get_repository_detail),
            );

        Router::new().nest("/api/v1", api_routes).with_state(state).layer(middleware_stack)
    }

    /// Run the server on the configured bind address
    pub async fn run(self) -> ServerResult<()> {
        let addr = self.config.bind_addr;
        info!("Starting server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already-bound listener (tests bind to an ephemeral port)
    pub async fn serve(self, listener: tokio::net::TcpListener) -> ServerResult<()> {
        axum::serve(listener, self.app)
            .await
            .map_err(|err| ServerError::Internal(format!("REST server error: {err}")))
    }
}
