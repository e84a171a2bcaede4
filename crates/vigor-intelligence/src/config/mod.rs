// ABOUTME: Configuration module for vigor-intelligence crate
// ABOUTME: Re-exports readiness configuration types and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;
/// Readiness engine weights and input limits
pub mod readiness;

pub use error::ConfigError;
pub use readiness::{ReadinessConfig, ReadinessLimits, ReadinessWeights};
