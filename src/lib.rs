// ABOUTME: Main library entry point for the Nutrient AI estimation server
// ABOUTME: HTTP shell around the meal analysis engine: config, logging, middleware, routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrient AI Server
//!
//! A prototype nutrition-estimation service. Given a free-text meal description
//! or an uploaded image, it guesses the foods involved, sums their nutrients,
//! flags deficiencies against daily reference values, and returns advice.
//!
//! Detection is a keyword match against a small fixed food table; there is no
//! computer vision. Image uploads are only checked for decodability and then
//! matched by file name.
//!
//! ## Architecture
//!
//! - **`nutrient-core`**: errors, data models, constants
//! - **`nutrient-intelligence`**: the pure analysis pipeline
//! - **this crate**: configuration, logging, middleware, routes, server lifecycle
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrient_ai_server::config::ServerConfig;
//! use nutrient_ai_server::server::NutrientServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     NutrientServer::new(config).run().await
//! }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Upload decodability check
pub mod image_validation;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Re-export of the analysis engine for library consumers
pub use nutrient_intelligence as intelligence;

/// Re-export of the data models
pub use nutrient_core::models;
