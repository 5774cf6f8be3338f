// ABOUTME: Application constants re-exported from nutrient-core
// ABOUTME: Routes, ports, limits, form fields, headers, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants, re-exported from `nutrient-core`

pub use nutrient_core::constants::*;
