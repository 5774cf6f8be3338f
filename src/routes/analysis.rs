// ABOUTME: Meal analysis route handlers for text descriptions and image uploads
// ABOUTME: Thin HTTP layer: extract input, validate uploads, delegate to the analysis engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal analysis routes
//!
//! `POST /analyze/text` takes `{"text": "..."}`. `POST /analyze/image` takes a
//! `multipart/form-data` upload with the image in the `file` part. Image bytes
//! are checked for decodability before the engine runs; the engine itself only
//! uses the upload's file name.

use crate::config::ServerConfig;
use crate::constants::{form_fields, routes};
use crate::errors::{AppError, AppResult};
use crate::image_validation::verify_image;
use crate::middleware::request_id_from_headers;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Multipart, State,
    },
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use nutrient_core::models::AnalysisResult;
use nutrient_intelligence::{analyze_image, analyze_text};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Body of a text analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextAnalysisRequest {
    /// Free-text meal description
    pub text: String,
}

/// An uploaded image extracted from a multipart form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied file name, empty when absent
    pub filename: String,
    /// Raw uploaded bytes
    pub data: Bytes,
}

/// Meal analysis routes
pub struct AnalysisRoutes;

impl AnalysisRoutes {
    /// Create all analysis routes
    pub fn routes(config: Arc<ServerConfig>) -> Router {
        Router::new()
            .route(routes::ANALYZE_TEXT, post(Self::handle_analyze_text))
            .route(routes::ANALYZE_IMAGE, post(Self::handle_analyze_image))
            .with_state(config)
    }

    /// Handle free-text meal analysis
    async fn handle_analyze_text(
        State(config): State<Arc<ServerConfig>>,
        headers: HeaderMap,
        payload: Result<Json<TextAnalysisRequest>, JsonRejection>,
    ) -> Result<Json<AnalysisResult>, AppError> {
        let Json(request) = payload
            .map_err(|rejection| {
                rejection_error(
                    rejection.status(),
                    rejection.body_text(),
                    config.limits.max_upload_bytes,
                )
            })
            .map_err(|e| attach_request_id(e, &headers))?;

        info!(text_len = request.text.len(), "analyzing meal text");
        Ok(Json(analyze_text(&request.text)))
    }

    /// Handle image upload meal analysis
    async fn handle_analyze_image(
        State(config): State<Arc<ServerConfig>>,
        headers: HeaderMap,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Json<AnalysisResult>, AppError> {
        Self::analyze_upload(&config, multipart)
            .await
            .map(Json)
            .map_err(|e| attach_request_id(e, &headers))
    }

    async fn analyze_upload(
        config: &ServerConfig,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> AppResult<AnalysisResult> {
        let limit = config.limits.max_upload_bytes;
        let mut multipart = multipart
            .map_err(|rejection| rejection_error(rejection.status(), rejection.body_text(), limit))?;

        let upload = read_image_upload(&mut multipart, limit).await?;
        let format = verify_image(upload.data.clone()).await?;

        info!(
            filename = %upload.filename,
            bytes = upload.data.len(),
            format = ?format,
            "analyzing meal image"
        );
        Ok(analyze_image(&upload.filename, &upload.data))
    }
}

/// Pull the image part out of a multipart form
///
/// # Errors
///
/// Returns `MISSING_REQUIRED_FIELD` if no `file` part is present, or an input
/// error if the form is malformed or over the size limit
pub async fn read_image_upload(multipart: &mut Multipart, limit: usize) -> AppResult<ImageUpload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&e, limit))?
    {
        if field.name() != Some(form_fields::IMAGE_FILE) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_owned();
        let data = field.bytes().await.map_err(|e| multipart_error(&e, limit))?;
        return Ok(ImageUpload { filename, data });
    }

    Err(AppError::missing_field(form_fields::IMAGE_FILE))
}

fn multipart_error(error: &MultipartError, limit: usize) -> AppError {
    rejection_error(error.status(), error.body_text(), limit)
}

fn rejection_error(status: StatusCode, body_text: String, limit: usize) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(limit)
    } else {
        AppError::invalid_input(body_text)
    }
}

fn attach_request_id(error: AppError, headers: &HeaderMap) -> AppError {
    match request_id_from_headers(headers) {
        Some(request_id) => error.with_request_id(request_id),
        None => error,
    }
}
