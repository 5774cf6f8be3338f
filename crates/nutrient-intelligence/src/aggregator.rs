// ABOUTME: Nutrient aggregation summing detected food items into meal totals
// ABOUTME: Field-wise addition over all six nutrients; empty input yields zero totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrient_core::models::{FoodItem, NutrientProfile, Totals};

/// Sum the nutrients of every item, field by field
#[must_use]
pub fn sum_nutrients(items: &[FoodItem]) -> Totals {
    items
        .iter()
        .fold(NutrientProfile::ZERO, |totals, item| totals + item.nutrients)
}
