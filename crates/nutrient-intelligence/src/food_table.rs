// ABOUTME: Static food table mapping food names to per-serving nutrient profiles
// ABOUTME: Enumeration order is significant: it drives keyword match order in detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Table
//!
//! Eight hardcoded foods with per-serving nutrients. The table is an immutable
//! `const` array; its order is observable behavior because detection scans it
//! front to back.

use nutrient_core::errors::{AppError, AppResult};
use nutrient_core::models::{FoodItem, NutrientProfile};

/// A named row of the food table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodEntry {
    /// Lower-case food name, also the detection keyword
    pub name: &'static str,
    /// Nutrients per serving
    pub nutrients: NutrientProfile,
}

impl FoodEntry {
    /// Materialize this entry as a detected item with the given portion
    #[must_use]
    pub fn item(&self, portion: &str) -> FoodItem {
        FoodItem {
            name: self.name.to_owned(),
            portion: portion.to_owned(),
            nutrients: self.nutrients,
        }
    }
}

/// Steamed white rice
pub const RICE: FoodEntry = FoodEntry {
    name: "rice",
    nutrients: NutrientProfile::new(206.0, 45.0, 4.0, 0.4, 0.4, 0.0),
};

/// Lentil dal
pub const DAL: FoodEntry = FoodEntry {
    name: "dal",
    nutrients: NutrientProfile::new(150.0, 20.0, 10.0, 3.0, 1.8, 0.0),
};

/// Mixed vegetables
pub const VEGETABLES: FoodEntry = FoodEntry {
    name: "vegetables",
    nutrients: NutrientProfile::new(50.0, 10.0, 2.0, 0.2, 0.5, 30.0),
};

/// Whole-wheat flatbread
pub const CHAPATI: FoodEntry = FoodEntry {
    name: "chapati",
    nutrients: NutrientProfile::new(120.0, 18.0, 3.0, 3.0, 0.9, 0.0),
};

/// One egg
pub const EGG: FoodEntry = FoodEntry {
    name: "egg",
    nutrients: NutrientProfile::new(78.0, 0.6, 6.0, 5.0, 0.9, 0.0),
};

/// One cup of milk
pub const MILK: FoodEntry = FoodEntry {
    name: "milk",
    nutrients: NutrientProfile::new(103.0, 12.0, 8.0, 2.4, 0.0, 0.0),
};

/// One medium banana
pub const BANANA: FoodEntry = FoodEntry {
    name: "banana",
    nutrients: NutrientProfile::new(105.0, 27.0, 1.3, 0.4, 0.3, 10.0),
};

/// Cooked spinach
pub const SPINACH: FoodEntry = FoodEntry {
    name: "spinach",
    nutrients: NutrientProfile::new(23.0, 3.6, 2.9, 0.4, 2.7, 28.0),
};

/// The full table in insertion order
pub const FOOD_TABLE: [FoodEntry; 8] = [RICE, DAL, VEGETABLES, CHAPATI, EGG, MILK, BANANA, SPINACH];

/// Iterate table entries in their defined order
pub fn entries() -> impl Iterator<Item = &'static FoodEntry> {
    FOOD_TABLE.iter()
}

/// Look up the per-serving profile for a food name
#[must_use]
pub fn lookup(name: &str) -> Option<NutrientProfile> {
    FOOD_TABLE
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.nutrients)
}

/// Build a [`FoodItem`] for a table key
///
/// # Errors
///
/// Returns an internal error if `name` is not a table key. Callers only pass
/// names they enumerated from the table, so this signals a broken invariant.
pub fn food_item(name: &str, portion: &str) -> AppResult<FoodItem> {
    let nutrients = lookup(name).ok_or_else(|| {
        tracing::error!(food = %name, "food item references a name absent from the food table");
        AppError::internal(format!("Unknown food table key: {name}"))
    })?;

    Ok(FoodItem {
        name: name.to_owned(),
        portion: portion.to_owned(),
        nutrients,
    })
}
