// ABOUTME: Core data models for the Nutrient AI estimation service
// ABOUTME: Re-exports nutrient profiles, food items, flags, and analysis results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data shared between the analysis engine and the HTTP shell.
//! Every model serializes to the exact JSON shape clients consume.

mod nutrition;

pub use nutrition::{
    AnalysisMode, AnalysisResult, DeficiencyFlags, FoodItem, Nutrient, NutrientProfile, Totals,
};
