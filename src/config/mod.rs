// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Exposes environment-driven server, CORS, and request-limit configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Nutrient AI server
//!
//! Configuration is environment-only; there are no config files.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, LogLevel, RequestLimits, ServerConfig};
