// ABOUTME: Meal analysis engine for the Nutrient AI estimation service
// ABOUTME: Food table, keyword detector, aggregator, deficiency evaluator, and recommender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrient Intelligence
//!
//! The detection → aggregation → flagging → recommendation pipeline, kept free
//! of I/O and shared state so it can be called from any number of request
//! handlers concurrently.

/// Nutrient summation across detected items
pub mod aggregator;
/// Pipeline entry points producing `AnalysisResult`
pub mod analysis;
/// Threshold comparison against daily reference allowances
pub mod deficiency;
/// Keyword-based food detection from text and file names
pub mod detector;
/// Static per-serving nutrient table
pub mod food_table;
/// Advice strings derived from deficiency flags
pub mod recommendation_engine;

pub use aggregator::sum_nutrients;
pub use analysis::{analyze_image, analyze_items, analyze_text};
pub use deficiency::{evaluate, ReferenceAllowance, REFERENCE_ALLOWANCE};
pub use detector::{detect_from_filename, detect_from_text};
pub use food_table::{lookup, FoodEntry, FOOD_TABLE};
pub use recommendation_engine::recommend;
