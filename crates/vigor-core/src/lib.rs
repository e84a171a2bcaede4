// ABOUTME: Core types and constants for the Vigor readiness and community platform
// ABOUTME: Foundation crate with error handling, validation errors, constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vigor Core
//!
//! Foundation crate providing shared types and constants for the Vigor
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Input domains, tier thresholds, and retention defaults
//! - **models**: Readiness check-in and community post data models

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (readiness inputs and results, community posts)
pub mod models;
