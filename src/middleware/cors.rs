// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for browser clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::CorsConfig;
use crate::constants::headers;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Configure CORS settings for the analysis server
///
/// Configures cross-origin requests from `CORS_ALLOWED_ORIGINS`.
///
/// - `*` or empty: any origin, any method, any header. Credentials are not
///   allowed in this mode since browsers reject `*` with credentials.
/// - Comma-separated list: only those origins, with credentials, the methods
///   the API serves, and the headers clients send.
///
/// # Examples
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins (production)
/// export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
/// ```
#[must_use]
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let request_id = HeaderName::from_static(headers::REQUEST_ID);

    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers([request_id]);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                HeaderValue::from_str(trimmed).ok()
            }
        })
        .collect();

    if origins.is_empty() {
        // Nothing parseable: behave as wildcard rather than locking everyone out
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            request_id.clone(),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .expose_headers([request_id])
}
