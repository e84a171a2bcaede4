// ABOUTME: Field-level validation error naming the offending input field
// ABOUTME: Converts into AppError with VALUE_OUT_OF_RANGE or MISSING_REQUIRED_FIELD codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Validation failure for a single named field
///
/// Always surfaced to the caller; inputs are rejected, never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Name of the offending field (wire name, e.g. `sleepQuality`)
    pub field: &'static str,
    /// Why the value was rejected
    pub reason: String,
    /// Whether the field was absent rather than out of range
    pub missing: bool,
}

impl ValidationError {
    /// Value present but outside its domain
    #[must_use]
    pub fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
            missing: false,
        }
    }

    /// Required value absent
    #[must_use]
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            reason: "field is required".to_owned(),
            missing: true,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = if error.missing {
            ErrorCode::MissingRequiredField
        } else {
            ErrorCode::ValueOutOfRange
        };
        Self::new(code, error.to_string())
            .with_details(serde_json::json!({ "field": error.field }))
    }
}
