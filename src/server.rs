// ABOUTME: HTTP server assembly and lifecycle for the Nutrient AI service
// ABOUTME: Builds the axum router with middleware layers and serves it with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server lifecycle
//!
//! The listener socket is the only process-lifetime state. Route handlers share
//! nothing mutable: the configuration is read-only behind an `Arc`, and the
//! analysis engine is a set of pure functions.

use crate::config::ServerConfig;
use crate::errors::AppError;
use crate::middleware::{
    create_request_span, propagate_request_id_layer, record_response, request_id_from_headers,
    set_request_id_layer, setup_cors,
};
use crate::routes::{AnalysisRoutes, HealthRoutes};
use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{HeaderMap, Request, Response, StatusCode, Uri},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, Span};

/// The analysis HTTP server
pub struct NutrientServer {
    config: Arc<ServerConfig>,
}

impl NutrientServer {
    /// Create a server from loaded configuration
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Build the full application router with all middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.config))
    }

    /// Bind and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the bind address is invalid, the port cannot be
    /// bound, or the server fails while running
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_address()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated with an error")?;

        info!("Server shut down cleanly");
        Ok(())
    }
}

/// Assemble routes and middleware
///
/// Layer order, outermost first: request ID assignment, tracing span,
/// request ID propagation, timeout, CORS, body limit.
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(set_request_id_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| create_request_span(request))
                .on_response(|response: &Response<Body>, latency: Duration, span: &Span| {
                    record_response(response, latency, span);
                }),
        )
        .layer(propagate_request_id_layer())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.limits.request_timeout(),
        ))
        .layer(setup_cors(&config.cors));

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AnalysisRoutes::routes(Arc::clone(&config)))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(config.limits.max_upload_bytes))
        .layer(middleware)
}

/// Unknown paths get the standard error envelope instead of an empty 404
async fn route_not_found(uri: Uri, headers: HeaderMap) -> AppError {
    let error = AppError::not_found(format!("Route {}", uri.path()));
    match request_id_from_headers(&headers) {
        Some(request_id) => error.with_request_id(request_id),
        None => error,
    }
}

/// Resolve on Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
