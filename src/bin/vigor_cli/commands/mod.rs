// ABOUTME: Re-exports command modules for vigor-cli
// ABOUTME: Provides access to readiness and community maintenance commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod community;
pub mod readiness;

use serde::Serialize;
use vigor::errors::AppResult;

/// Print a value to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
