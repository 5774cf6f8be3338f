// ABOUTME: Meal analysis entry points running detection, aggregation, flags, and advice
// ABOUTME: Stateless functions of their input plus the food table and reference values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis pipeline
//!
//! `input → detect → sum_nutrients → evaluate → recommend → AnalysisResult`.
//!
//! Every function here is pure. The image entry point receives the raw upload
//! only for bookkeeping; checking that the bytes decode is the caller's job and
//! must happen before this module is reached.

use crate::aggregator::sum_nutrients;
use crate::deficiency::evaluate;
use crate::detector::{detect_from_filename, detect_from_text};
use crate::food_table;
use crate::recommendation_engine::recommend;
use nutrient_core::errors::{AppError, AppResult};
use nutrient_core::models::{AnalysisMode, AnalysisResult, FoodItem};
use tracing::info;

fn assemble(mode: AnalysisMode, detected: Vec<FoodItem>) -> AnalysisResult {
    let totals = sum_nutrients(&detected);
    let flags = evaluate(&totals);
    let recommendations = recommend(&flags);

    info!(
        mode = %mode,
        detected = detected.len(),
        low_iron = flags.low_iron,
        low_vitamin_c = flags.low_vitamin_c,
        low_protein = flags.low_protein,
        "meal analyzed"
    );

    AnalysisResult {
        mode,
        detected,
        totals,
        flags,
        recommendations,
    }
}

/// Analyze a free-text meal description
#[must_use]
pub fn analyze_text(text: &str) -> AnalysisResult {
    assemble(AnalysisMode::Text, detect_from_text(text))
}

/// Analyze an uploaded meal image by its file name
///
/// `raw_image_bytes` must already have passed the decodability check; its
/// content is not inspected.
#[must_use]
pub fn analyze_image(filename_hint: &str, raw_image_bytes: &[u8]) -> AnalysisResult {
    tracing::debug!(
        filename = %filename_hint,
        bytes = raw_image_bytes.len(),
        "analyzing image upload"
    );
    assemble(AnalysisMode::Image, detect_from_filename(filename_hint))
}

/// Run aggregation, flagging, and advice over an externally supplied item list
///
/// # Errors
///
/// Returns an internal error if any item names a food absent from the table.
pub fn analyze_items(mode: AnalysisMode, items: Vec<FoodItem>) -> AppResult<AnalysisResult> {
    if let Some(unknown) = items
        .iter()
        .find(|item| food_table::lookup(&item.name).is_none())
    {
        tracing::error!(food = %unknown.name, "detected item missing from food table");
        return Err(AppError::internal(format!(
            "Detected item not in food table: {}",
            unknown.name
        )));
    }
    Ok(assemble(mode, items))
}
