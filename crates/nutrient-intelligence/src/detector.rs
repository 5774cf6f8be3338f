// ABOUTME: Keyword detector turning meal text or image file names into food items
// ABOUTME: Case-insensitive substring scan over the food table with fixed fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food detection
//!
//! There is no vision or language model here. Both entry points lower-case
//! their input and report every food table key that occurs as a substring,
//! in table order. Each key is reported at most once per scan; nested keys
//! (one name inside another) are matched independently.
//!
//! When nothing matches, a fixed fallback is returned, so detection never
//! yields an empty list.

use crate::food_table::{self, DAL, RICE, VEGETABLES};
use nutrient_core::models::FoodItem;
use tracing::debug;

/// Portion assumed for every keyword match
pub const MATCHED_PORTION: &str = "1 serving";

/// Scan lower-cased `haystack` for table keys, in table order
fn match_keywords(haystack: &str) -> Vec<FoodItem> {
    let haystack = haystack.to_lowercase();
    food_table::entries()
        .filter(|entry| haystack.contains(entry.name))
        .map(|entry| entry.item(MATCHED_PORTION))
        .collect()
}

/// Detect foods mentioned in a free-text meal description
///
/// Falls back to a single bowl of vegetables when no keyword matches.
#[must_use]
pub fn detect_from_text(text: &str) -> Vec<FoodItem> {
    let items = match_keywords(text);
    if items.is_empty() {
        debug!(input_len = text.len(), "no keyword in text, using fallback");
        return vec![VEGETABLES.item("1 bowl")];
    }
    items
}

/// Detect foods from an uploaded image's file name
///
/// Image content is never inspected. Falls back to a typical plate of rice,
/// dal, and vegetables when the name matches nothing.
#[must_use]
pub fn detect_from_filename(filename: &str) -> Vec<FoodItem> {
    let items = match_keywords(filename);
    if items.is_empty() {
        debug!(filename = %filename, "no keyword in filename, using fallback plate");
        return vec![
            RICE.item("1 cup"),
            DAL.item("1/2 cup"),
            VEGETABLES.item("1 bowl"),
        ];
    }
    items
}
