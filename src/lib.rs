// ABOUTME: Main library entry point for Vigor readiness scoring and community retention
// ABOUTME: Wires the core models, readiness engine, SQLite stores, and the retention sweep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vigor
//!
//! Backend pieces of a fitness tracking app:
//!
//! - **Readiness engine**: turns a daily check-in (sleep quality, stress,
//!   muscle soreness, fatigue) into a 0-10 score and a training tier.
//! - **Check-ins**: one record per user per calendar day, overwritten on resubmission.
//! - **Retention sweep**: a rate-limited, best-effort purge of community posts
//!   older than the retention window together with their comments.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vigor::intelligence::ReadinessCalculator;
//! use vigor::models::ReadinessInput;
//!
//! let calculator = ReadinessCalculator::default();
//! let result = calculator.assess(&ReadinessInput::new(8, 3, 2, 20.0))?;
//! println!("{} -> {}", result.score, result.recommendation);
//! # Ok::<(), vigor::errors::ValidationError>(())
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants re-exported from `vigor-core`
pub mod constants;

/// SQLite persistence for posts and check-ins
pub mod database;

/// Unified error types re-exported from `vigor-core`
pub mod errors;

/// Readiness engine re-exported from `vigor-intelligence`
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Domain models re-exported from `vigor-core`
pub mod models;

/// Domain services: check-ins and the retention sweep
pub mod services;

/// Small key-value stores for local sweep state
pub mod storage;
