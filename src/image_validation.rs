// ABOUTME: Image decodability check run before the analysis pipeline sees an upload
// ABOUTME: Decodes uploaded bytes on the blocking pool and rejects anything that is not an image
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Upload validation
//!
//! Only decodability is checked. Pixel content is never examined, and the
//! analysis pipeline only ever sees the file name.

use crate::errors::{AppError, AppResult};
use bytes::Bytes;
use image::ImageFormat;
use tracing::debug;

/// Client-facing message for undecodable uploads
pub const INVALID_IMAGE_MESSAGE: &str = "Invalid image file";

/// Verify that `data` is a decodable image, returning its detected format
///
/// # Errors
///
/// Returns `INVALID_FORMAT` if the format cannot be recognized or decoding fails
pub fn verify_image_bytes(data: &[u8]) -> AppResult<ImageFormat> {
    let format = image::guess_format(data)
        .map_err(|e| AppError::invalid_format(INVALID_IMAGE_MESSAGE).with_source(e))?;

    image::load_from_memory_with_format(data, format)
        .map_err(|e| AppError::invalid_format(INVALID_IMAGE_MESSAGE).with_source(e))?;

    debug!(format = ?format, bytes = data.len(), "upload decoded as image");
    Ok(format)
}

/// Run [`verify_image_bytes`] on the blocking thread pool
///
/// Decoding is CPU-bound, so it must not run on an async worker thread.
///
/// # Errors
///
/// Returns `INVALID_FORMAT` for undecodable data, or `INTERNAL_ERROR` if the
/// blocking task panicked or was cancelled
pub async fn verify_image(data: Bytes) -> AppResult<ImageFormat> {
    tokio::task::spawn_blocking(move || verify_image_bytes(&data))
        .await
        .map_err(|e| AppError::internal(format!("Image verification task failed: {e}")))?
}
