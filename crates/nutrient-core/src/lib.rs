// ABOUTME: Core types and constants for the Nutrient AI estimation service
// ABOUTME: Foundation crate with error handling, nutrition models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrient Core
//!
//! Foundation crate providing shared types and constants for the Nutrient AI
//! service. It changes rarely, so the engine and server crates can compile
//! incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Nutrient profiles, food items, flags, and analysis results
//! - **constants**: Routes, ports, limits, and service identity

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`NutrientProfile`, `FoodItem`, `AnalysisResult`, ...)
pub mod models;
