// ABOUTME: Route module organization for Nutrient AI HTTP endpoints
// ABOUTME: Groups route definitions by domain with thin handlers over the analysis engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Nutrient AI server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the analysis engine.

/// Meal analysis routes (text and image)
pub mod analysis;
/// Health check routes
pub mod health;

/// Analysis route handlers
pub use analysis::AnalysisRoutes;
/// Text analysis request body
pub use analysis::TextAnalysisRequest;
/// Health check route handlers
pub use health::HealthRoutes;
