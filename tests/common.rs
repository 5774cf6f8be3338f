// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and a router wired with test configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Shared test utilities for `nutrient_ai_server`

use axum::Router;
use nutrient_ai_server::config::{Environment, ServerConfig};
use nutrient_ai_server::server::build_router;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Configuration used by route tests
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_owned(),
        http_port: 0,
        environment: Environment::Testing,
        ..ServerConfig::default()
    }
}

/// Fully layered application router with test configuration
pub fn test_router() -> Router {
    init_test_logging();
    build_router(Arc::new(test_config()))
}

/// Router with a custom configuration
pub fn router_with(config: ServerConfig) -> Router {
    init_test_logging();
    build_router(Arc::new(config))
}
