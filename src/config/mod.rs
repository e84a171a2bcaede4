// ABOUTME: Configuration module for environment-driven settings
// ABOUTME: Re-exports the application config and retention sweep config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based configuration (database, state directory, log level)
pub mod environment;
/// Community retention sweep configuration
pub mod retention;

pub use environment::{AppConfig, Environment, LogLevel};
pub use retention::RetentionConfig;
pub use vigor_intelligence::config::{ConfigError, ReadinessConfig};
