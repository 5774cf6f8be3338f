// ABOUTME: Test fixtures for upload tests
// ABOUTME: Generates small in-memory images in real encoded formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use image::{DynamicImage, ImageOutputFormat, RgbImage};
use std::io::Cursor;

fn encode(format: ImageOutputFormat) -> Vec<u8> {
    let pixels = RgbImage::from_fn(4, 4, |x, y| image::Rgb([(x * 60) as u8, (y * 60) as u8, 128]));
    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(pixels)
        .write_to(&mut Cursor::new(&mut buffer), format)
        .expect("Failed to encode test image");
    buffer
}

/// A 4x4 PNG
pub fn png_bytes() -> Vec<u8> {
    encode(ImageOutputFormat::Png)
}

/// A 4x4 JPEG
#[allow(dead_code)]
pub fn jpeg_bytes() -> Vec<u8> {
    encode(ImageOutputFormat::Jpeg(80))
}
