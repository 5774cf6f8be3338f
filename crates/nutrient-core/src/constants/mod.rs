// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for routes, ports, limits, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Application constants grouped by domain. Nutrition reference data lives with
//! the analysis engine, not here.

/// API routes
pub mod routes {
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Free-text meal analysis
    pub const ANALYZE_TEXT: &str = "/analyze/text";
    /// Image upload meal analysis
    pub const ANALYZE_IMAGE: &str = "/analyze/image";
}

/// Network defaults
pub mod ports {
    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
}

/// Default limits
pub mod limits {
    /// Maximum request body size in bytes for uploads
    pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10_485_760; // 10MB
    /// Default per-request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Multipart form field names
pub mod form_fields {
    /// Image upload part
    pub const IMAGE_FILE: &str = "file";
}

/// Service identity used in logs and health output
pub mod service_names {
    /// Server binary and service name
    pub const NUTRIENT_AI_SERVER: &str = "nutrient-ai-server";
    /// Human-readable title
    pub const SERVICE_TITLE: &str = "Nutrient AI – Prototype";
}

/// Headers
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}
