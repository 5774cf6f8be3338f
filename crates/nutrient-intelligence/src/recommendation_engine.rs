// ABOUTME: Recommendation engine mapping deficiency flags to dietary advice
// ABOUTME: Emits fixed advice strings in flag-check order with a balanced-meal fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrient_core::models::DeficiencyFlags;

/// Advice for low iron
pub const LOW_IRON_ADVICE: &str =
    "Include spinach, beans, or lean meats; pair with citrus for iron absorption.";
/// Advice for low vitamin C
pub const LOW_VITAMIN_C_ADVICE: &str =
    "Add fruits like orange, guava, or banana; include bell peppers or tomatoes.";
/// Advice for low protein
pub const LOW_PROTEIN_ADVICE: &str =
    "Add eggs, dal, paneer/tofu, or dairy to increase protein intake.";
/// Advice when nothing is flagged
pub const BALANCED_MEAL_ADVICE: &str =
    "Meal looks balanced for this portion. Keep variety across the day.";

/// Turn deficiency flags into an ordered, never-empty list of advice
///
/// Flags are checked as iron, vitamin C, protein.
#[must_use]
pub fn recommend(flags: &DeficiencyFlags) -> Vec<String> {
    let checks = [
        (flags.low_iron, LOW_IRON_ADVICE),
        (flags.low_vitamin_c, LOW_VITAMIN_C_ADVICE),
        (flags.low_protein, LOW_PROTEIN_ADVICE),
    ];

    let recommendations: Vec<String> = checks
        .iter()
        .filter(|(raised, _)| *raised)
        .map(|(_, advice)| (*advice).to_owned())
        .collect();

    if recommendations.is_empty() {
        return vec![BALANCED_MEAL_ADVICE.to_owned()];
    }
    recommendations
}
