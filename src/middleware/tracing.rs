// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates request IDs and creates spans for all HTTP requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::headers;
use axum::http::{HeaderMap, HeaderName, Request, Response};
use std::time::Duration;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::Span;

fn request_id_header() -> HeaderName {
    HeaderName::from_static(headers::REQUEST_ID)
}

/// Layer that assigns a UUID `x-request-id` to requests arriving without one
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(request_id_header(), MakeRequestUuid)
}

/// Layer that copies the request's `x-request-id` onto the response
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(request_id_header())
}

/// Read the correlation ID from request headers, if present
#[must_use]
pub fn request_id_from_headers(header_map: &HeaderMap) -> Option<String> {
    header_map
        .get(headers::REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Create a tracing span for HTTP requests
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request_id_from_headers(request.headers());
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = request_id.as_deref().unwrap_or("unknown"),
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Record response status and latency on the request span
#[allow(clippy::cast_possible_truncation)] // Safe: request latency fits in u64 milliseconds
pub fn record_response<B>(response: &Response<B>, latency: Duration, span: &Span) {
    let status = response.status().as_u16();
    let duration_ms = latency.as_millis() as u64;
    span.record("status_code", status);
    span.record("duration_ms", duration_ms);
    tracing::info!(status, duration_ms, "request completed");
}
