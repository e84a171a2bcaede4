// ABOUTME: Data model re-exports from the vigor-core crate
// ABOUTME: Readiness inputs and results plus community post and comment records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use vigor_core::models::*;
