// ABOUTME: Deficiency evaluator comparing meal totals with daily reference allowances
// ABOUTME: Flags iron, vitamin C, and protein below a quarter of the daily reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deficiency evaluation
//!
//! A meal is assumed to cover a quarter of the day. A nutrient is flagged when
//! the meal total is strictly below 25% of its daily reference; equality is not
//! deficient.
//!
//! Calories have a reference value but no flag, and carbs/fat have neither.
//! That asymmetry is intentional and must not be "completed".

use nutrient_core::models::{DeficiencyFlags, Nutrient, Totals};
use serde::Serialize;

/// Share of the daily reference a single meal is expected to supply
pub const DEFICIENCY_FRACTION: f64 = 0.25;

/// Recommended daily amounts for the nutrients that have one
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceAllowance {
    /// Energy (kcal/day)
    pub calories: f64,
    /// Protein (g/day)
    pub protein: f64,
    /// Iron (mg/day)
    pub iron: f64,
    /// Vitamin C (mg/day)
    pub vitamin_c: f64,
}

impl ReferenceAllowance {
    /// Daily reference for a nutrient, if one is defined
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => Some(self.calories),
            Nutrient::Protein => Some(self.protein),
            Nutrient::Iron => Some(self.iron),
            Nutrient::VitaminC => Some(self.vitamin_c),
            Nutrient::Carbs | Nutrient::Fat => None,
        }
    }

    /// Per-meal threshold below which a nutrient counts as low
    #[must_use]
    pub fn threshold(&self, nutrient: Nutrient) -> Option<f64> {
        self.get(nutrient).map(|daily| daily * DEFICIENCY_FRACTION)
    }
}

/// Process-wide daily reference values
pub const REFERENCE_ALLOWANCE: ReferenceAllowance = ReferenceAllowance {
    calories: 2000.0,
    protein: 50.0,
    iron: 18.0,
    vitamin_c: 90.0,
};

fn is_low(totals: &Totals, nutrient: Nutrient) -> bool {
    REFERENCE_ALLOWANCE
        .threshold(nutrient)
        .is_some_and(|threshold| totals.get(nutrient) < threshold)
}

/// Derive deficiency flags from meal totals
#[must_use]
pub fn evaluate(totals: &Totals) -> DeficiencyFlags {
    DeficiencyFlags {
        low_iron: is_low(totals, Nutrient::Iron),
        low_vitamin_c: is_low(totals, Nutrient::VitaminC),
        low_protein: is_low(totals, Nutrient::Protein),
    }
}
