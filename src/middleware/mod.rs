// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID generation, span creation, and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer construction
pub mod cors;
/// Request ID and span helpers
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and correlation
pub use self::tracing::{
    create_request_span, propagate_request_id_layer, record_response, request_id_from_headers,
    set_request_id_layer,
};
