// ABOUTME: Constant re-exports from the vigor-core crate
// ABOUTME: Readiness scale bounds, retention defaults, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use vigor_core::constants::*;
