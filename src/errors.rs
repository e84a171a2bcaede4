// ABOUTME: Error handling re-exports from the vigor-core crate
// ABOUTME: Keeps crate::errors paths stable for the binary and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use vigor_core::errors::*;
