// ABOUTME: Error handling re-exports from nutrient-core
// ABOUTME: Keeps `crate::errors::*` paths stable for the server crate and its tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling system, re-exported from `nutrient-core`

pub use nutrient_core::errors::*;
