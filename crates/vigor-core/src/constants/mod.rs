// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Readiness input domains, tier thresholds, retention defaults, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Retention sweep defaults and persisted cursor keys
pub mod retention;

/// Service identification
pub mod service_names {
    /// Service name used in structured logs
    pub const VIGOR: &str = "vigor";
}

/// Readiness input domains and recommendation thresholds
pub mod readiness {
    /// Lowest accepted value for 1-10 self-reported scales
    pub const SCALE_MIN: u8 = 1;
    /// Highest accepted value for 1-10 self-reported scales
    pub const SCALE_MAX: u8 = 10;
    /// Lowest accepted fatigue percentage
    pub const FATIGUE_MIN: f64 = 0.0;
    /// Highest accepted fatigue percentage
    pub const FATIGUE_MAX: f64 = 100.0;

    /// Upper bound of the readiness score scale
    pub const SCORE_MAX: f64 = 10.0;

    /// Scores at or above this value recommend intense training
    pub const INTENSE_THRESHOLD: f64 = 8.0;
    /// Scores at or above this value recommend moderate training
    pub const MODERATE_THRESHOLD: f64 = 6.0;
    /// Scores at or above this value recommend light training; below means rest
    pub const LIGHT_THRESHOLD: f64 = 4.0;

    /// Maximum length of free-text notes, in characters
    pub const MAX_NOTES_CHARS: usize = 1_000;
    /// Maximum number of soreness zones on one check-in
    pub const MAX_SORENESS_ZONES: usize = 24;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Database connection URL
    pub const DATABASE_URL: &str = "VIGOR_DATABASE_URL";
    /// Directory holding device-local state (sweep cursor)
    pub const STATE_DIR: &str = "VIGOR_STATE_DIR";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level / filter
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Toggle for the community retention sweep
    pub const CLEANUP_ENABLED: &str = "COMMUNITY_CLEANUP_ENABLED";
    /// Retention window in days
    pub const RETENTION_DAYS: &str = "COMMUNITY_RETENTION_DAYS";
    /// Minimum days between sweeps
    pub const CLEANUP_INTERVAL_DAYS: &str = "COMMUNITY_CLEANUP_INTERVAL_DAYS";
}

/// Default values used when configuration is absent
pub mod defaults {
    /// Default `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/vigor.db";
    /// Sub-directory created under the platform data dir for local state
    pub const STATE_DIR_NAME: &str = "vigor";
    /// File name of the local key-value state file
    pub const LOCAL_STATE_FILE: &str = "local_state.json";
}
