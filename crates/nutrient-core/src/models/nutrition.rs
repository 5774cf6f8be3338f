// ABOUTME: Nutrition analysis models for meal estimation requests and responses
// ABOUTME: NutrientProfile, FoodItem, DeficiencyFlags, and AnalysisResult definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// One of the six tracked nutrient fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy in kcal
    Calories,
    /// Carbohydrates in grams
    Carbs,
    /// Protein in grams
    Protein,
    /// Fat in grams
    Fat,
    /// Iron in milligrams
    Iron,
    /// Vitamin C in milligrams
    VitaminC,
}

impl Nutrient {
    /// All nutrients in canonical field order
    pub const ALL: [Self; 6] = [
        Self::Calories,
        Self::Carbs,
        Self::Protein,
        Self::Fat,
        Self::Iron,
        Self::VitaminC,
    ];

    /// Field name as it appears on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Carbs => "carbs",
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::Iron => "iron",
            Self::VitaminC => "vitamin_c",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-serving nutrient values for a food, or a summed total across foods
///
/// All fields are non-negative. Units follow common label conventions:
/// kcal for energy, grams for macronutrients, milligrams for iron and vitamin C.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat: f64,
    /// Iron (mg)
    #[serde(default)]
    pub iron: f64,
    /// Vitamin C (mg)
    #[serde(default)]
    pub vitamin_c: f64,
}

impl NutrientProfile {
    /// Profile with every field at zero
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    /// Build a profile from its six fields in canonical order
    #[must_use]
    pub const fn new(
        calories: f64,
        carbs: f64,
        protein: f64,
        fat: f64,
        iron: f64,
        vitamin_c: f64,
    ) -> Self {
        Self {
            calories,
            carbs,
            protein,
            fat,
            iron,
            vitamin_c,
        }
    }

    /// Read a single nutrient value
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Carbs => self.carbs,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Iron => self.iron,
            Nutrient::VitaminC => self.vitamin_c,
        }
    }
}

impl AddAssign for NutrientProfile {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.carbs += rhs.carbs;
        self.protein += rhs.protein;
        self.fat += rhs.fat;
        self.iron += rhs.iron;
        self.vitamin_c += rhs.vitamin_c;
    }
}

impl Add for NutrientProfile {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Summed nutrient content of every item detected in one request
pub type Totals = NutrientProfile;

/// A food guessed from the request input, with an assumed portion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food table key
    pub name: String,
    /// Free-text portion descriptor ("1 serving", "1/2 cup", ...)
    pub portion: String,
    /// Nutrients for this item, copied from the food table
    pub nutrients: NutrientProfile,
}

/// Per-nutrient deficiency flags derived from meal totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeficiencyFlags {
    /// Iron below a quarter of the daily reference
    pub low_iron: bool,
    /// Vitamin C below a quarter of the daily reference
    pub low_vitamin_c: bool,
    /// Protein below a quarter of the daily reference
    pub low_protein: bool,
}

impl DeficiencyFlags {
    /// Whether any flag is raised
    #[must_use]
    pub const fn any(&self) -> bool {
        self.low_iron || self.low_vitamin_c || self.low_protein
    }
}

/// Which input channel produced an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Free-text meal description
    Text,
    /// Uploaded image, matched by file name
    Image,
}

impl AnalysisMode {
    /// Wire name of the mode
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete result of analyzing one meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Input channel
    pub mode: AnalysisMode,
    /// Detected foods in detection order
    pub detected: Vec<FoodItem>,
    /// Field-wise sum of `detected` nutrients
    pub totals: Totals,
    /// Deficiency flags computed from `totals`
    pub flags: DeficiencyFlags,
    /// Advice strings, never empty
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_add_is_field_wise() {
        let a = NutrientProfile::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let b = NutrientProfile::new(10.0, 20.0, 30.0, 40.0, 50.0, 60.0);
        assert_eq!(a + b, NutrientProfile::new(11.0, 22.0, 33.0, 44.0, 55.0, 66.0));
    }

    #[test]
    fn test_get_matches_fields() {
        let profile = NutrientProfile::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let values: Vec<f64> = Nutrient::ALL.iter().map(|n| profile.get(*n)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_profile_serializes_with_wire_names() {
        let json = serde_json::to_value(NutrientProfile::ZERO).unwrap();
        for nutrient in Nutrient::ALL {
            assert!(json.get(nutrient.as_str()).is_some(), "missing {nutrient}");
        }
    }

    #[test]
    fn test_missing_profile_fields_default_to_zero() {
        let profile: NutrientProfile = serde_json::from_str(r#"{"iron": 2.5}"#).unwrap();
        assert!((profile.iron - 2.5).abs() < f64::EPSILON);
        assert!(profile.calories.abs() < f64::EPSILON);
    }

    #[test]
    fn test_analysis_mode_wire_format() {
        assert_eq!(serde_json::to_string(&AnalysisMode::Text).unwrap(), "\"text\"");
        assert_eq!(serde_json::to_string(&AnalysisMode::Image).unwrap(), "\"image\"");
    }

    #[test]
    fn test_flags_any() {
        assert!(!DeficiencyFlags::default().any());
        let flags = DeficiencyFlags {
            low_protein: true,
            ..DeficiencyFlags::default()
        };
        assert!(flags.any());
    }
}
