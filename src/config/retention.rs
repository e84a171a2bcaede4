// ABOUTME: Retention sweep configuration: retention window, sweep interval, on/off switch
// ABOUTME: Loaded from COMMUNITY_* environment variables with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::environment::{env_bool_or, env_var_or};
use crate::constants::env_config;
use crate::constants::retention::{
    DEFAULT_RETENTION_DAYS, DEFAULT_SWEEP_INTERVAL_DAYS, MAX_RETENTION_DAYS,
};
use anyhow::{Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use vigor_intelligence::ConfigError;

/// Community post retention policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionConfig {
    /// Whether the sweep runs at all
    pub enabled: bool,
    /// Posts older than this many days are deleted
    pub retention_days: u32,
    /// Minimum days between sweep attempts
    pub interval_days: u32,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            retention_days: DEFAULT_RETENTION_DAYS,
            interval_days: DEFAULT_SWEEP_INTERVAL_DAYS,
        }
    }
}

impl RetentionConfig {
    /// Load from `COMMUNITY_CLEANUP_ENABLED`, `COMMUNITY_RETENTION_DAYS`, `COMMUNITY_CLEANUP_INTERVAL_DAYS`
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or the result is invalid
    pub fn from_env() -> Result<Self> {
        let config = Self {
            enabled: env_bool_or(env_config::CLEANUP_ENABLED, true)?,
            retention_days: env_var_or(
                env_config::RETENTION_DAYS,
                &DEFAULT_RETENTION_DAYS.to_string(),
            )
            .parse()
            .context("Invalid COMMUNITY_RETENTION_DAYS value")?,
            interval_days: env_var_or(
                env_config::CLEANUP_INTERVAL_DAYS,
                &DEFAULT_SWEEP_INTERVAL_DAYS.to_string(),
            )
            .parse()
            .context("Invalid COMMUNITY_CLEANUP_INTERVAL_DAYS value")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the policy
    ///
    /// # Errors
    ///
    /// Returns an error if the retention window or interval is zero or above `MAX_RETENTION_DAYS`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_RETENTION_DAYS).contains(&self.retention_days) {
            return Err(ConfigError::InvalidRange(
                "retention_days must be between 1 and 36500",
            ));
        }
        if !(1..=MAX_RETENTION_DAYS).contains(&self.interval_days) {
            return Err(ConfigError::InvalidRange(
                "interval_days must be between 1 and 36500",
            ));
        }
        Ok(())
    }

    /// Age beyond which a post is eligible for deletion
    #[must_use]
    pub fn retention_window(&self) -> Duration {
        Duration::days(i64::from(self.retention_days))
    }

    /// Minimum elapsed time between sweeps
    #[must_use]
    pub fn sweep_interval(&self) -> Duration {
        Duration::days(i64::from(self.interval_days))
    }
}
