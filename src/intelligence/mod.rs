// ABOUTME: Intelligence module re-exports from the vigor-intelligence crate
// ABOUTME: Exposes the readiness calculator and its configuration under crate::intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use vigor_intelligence::*;
