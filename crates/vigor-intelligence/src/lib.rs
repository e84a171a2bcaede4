// ABOUTME: Readiness intelligence engine for the Vigor fitness platform
// ABOUTME: Pure scoring and recommendation algorithms with validated configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vigor Intelligence
//!
//! Turns a user's daily self-reported recovery signals into a readiness score
//! and a training recommendation tier. Everything here is synchronous and
//! free of I/O; persistence lives in the main crate.

/// Engine configuration (weights, limits) and configuration errors
pub mod config;

/// Readiness scoring and recommendation
pub mod readiness;

pub use config::{ConfigError, ReadinessConfig};
pub use readiness::{ReadinessCalculator, ReadinessComponents};
