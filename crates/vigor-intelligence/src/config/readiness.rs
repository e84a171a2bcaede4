// ABOUTME: Readiness engine configuration for scoring weights and input limits
// ABOUTME: Weights must be non-negative and sum to one so the score stays monotonic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Readiness Engine Configuration
//!
//! Each of the four required signals is normalised to a 0-10 recovery
//! component; the weights below decide how much each component contributes
//! to the final score.

use super::ConfigError;
use serde::{Deserialize, Serialize};
use vigor_core::constants::readiness::{MAX_NOTES_CHARS, MAX_SORENESS_ZONES};

/// Tolerance when checking that weights sum to one
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Readiness Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Contribution of each recovery component
    pub weights: ReadinessWeights,
    /// Limits on optional free-form input
    pub limits: ReadinessLimits,
}

/// Weights for each recovery component in the combined score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessWeights {
    /// Weight for sleep quality
    pub sleep_weight: f64,
    /// Weight for (inverted) stress
    pub stress_weight: f64,
    /// Weight for (inverted) soreness
    pub soreness_weight: f64,
    /// Weight for (inverted) fatigue
    pub fatigue_weight: f64,
}

/// Limits on optional check-in fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessLimits {
    /// Maximum characters in free-text notes
    pub max_notes_chars: usize,
    /// Maximum number of soreness zones
    pub max_soreness_zones: usize,
}

impl Default for ReadinessWeights {
    fn default() -> Self {
        Self {
            sleep_weight: 0.35,
            stress_weight: 0.20,
            soreness_weight: 0.20,
            fatigue_weight: 0.25,
        }
    }
}

impl Default for ReadinessLimits {
    fn default() -> Self {
        Self {
            max_notes_chars: MAX_NOTES_CHARS,
            max_soreness_zones: MAX_SORENESS_ZONES,
        }
    }
}

impl ReadinessWeights {
    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.sleep_weight + self.stress_weight + self.soreness_weight + self.fatigue_weight
    }

    /// Validate weights
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is negative or non-finite, or if the weights do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            self.sleep_weight,
            self.stress_weight,
            self.soreness_weight,
            self.fatigue_weight,
        ];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "readiness weights must be finite and non-negative",
            ));
        }
        if (self.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "readiness weights must sum to 1.0",
            ));
        }
        Ok(())
    }
}

impl ReadinessConfig {
    /// Validate the whole configuration
    ///
    /// # Errors
    ///
    /// Returns an error if weights are invalid or limits are zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        if self.limits.max_notes_chars == 0 {
            return Err(ConfigError::InvalidRange("max_notes_chars must be positive"));
        }
        Ok(())
    }
}
