// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Liveness probe returning a constant status marker, independent of analysis logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use crate::constants::routes;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({ "status": "ok" }))
        }

        Router::new().route(routes::HEALTH, get(health_handler))
    }
}
