// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use super::retention::RetentionConfig;
use crate::constants::{defaults, env_config};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration assembled from environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// `SQLite` connection URL for posts and check-ins
    pub database_url: String,
    /// Directory for device-local state such as the sweep cursor
    pub state_dir: PathBuf,
    /// Community retention sweep policy
    pub retention: RetentionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is malformed or no state directory can be determined
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let database_url = env_var_or(env_config::DATABASE_URL, defaults::DATABASE_URL);
        if !database_url.starts_with("sqlite:") {
            bail!("{} must be a sqlite: URL, got {database_url}", env_config::DATABASE_URL);
        }

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_config::RUST_LOG, "info")),
            database_url,
            state_dir: resolve_state_dir()?,
            retention: RetentionConfig::from_env()?,
        };

        info!(
            environment = %config.environment,
            state_dir = %config.state_dir.display(),
            retention_days = config.retention.retention_days,
            interval_days = config.retention.interval_days,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Path of the local key-value state file
    #[must_use]
    pub fn local_state_path(&self) -> PathBuf {
        self.state_dir.join(defaults::LOCAL_STATE_FILE)
    }

    /// Override the database URL (CLI flag)
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    /// Override the state directory (CLI flag)
    #[must_use]
    pub fn with_state_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.state_dir = dir.as_ref().to_path_buf();
        self
    }
}

fn resolve_state_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(env_config::STATE_DIR) {
        return Ok(PathBuf::from(dir));
    }
    match dirs::data_local_dir() {
        Some(base) => Ok(base.join(defaults::STATE_DIR_NAME)),
        None => {
            warn!("No platform data directory; set {}", env_config::STATE_DIR);
            bail!("cannot determine local state directory")
        }
    }
}

/// Read an environment variable, falling back to `default` when unset
#[must_use]
pub fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read a boolean environment variable (`true/false/1/0/yes/no`)
///
/// # Errors
///
/// Returns an error if the variable is set to an unrecognized value
pub fn env_bool_or(key: &str, default: bool) -> Result<bool> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(value) => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            other => bail!("Invalid {key} value: {other}"),
        },
    }
}
