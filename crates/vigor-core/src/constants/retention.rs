// ABOUTME: Retention sweep constants for community post cleanup
// ABOUTME: Default retention window, sweep interval, and the persisted cursor key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Posts older than this many days are eligible for deletion
pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// Minimum days between two sweep attempts on the same device
pub const DEFAULT_SWEEP_INTERVAL_DAYS: u32 = 1;

/// Upper bound for both the retention window and the sweep interval (about a century)
pub const MAX_RETENTION_DAYS: u32 = 36_500;

/// Local key-value slot holding the last successful sweep time (epoch millis)
pub const LAST_SWEEP_KEY: &str = "community_cleanup_last_run";
