// ABOUTME: Readiness scoring from daily sleep, stress, soreness, and fatigue check-ins
// ABOUTME: Maps the 0-10 readiness score onto REST, LIGHT, MODERATE, or INTENSE guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Readiness Calculator Module
//!
//! Each required signal is converted into a 0-10 *recovery component* where
//! 10 means "fully recovered":
//!
//! | Signal | Domain | Component |
//! |---|---|---|
//! | sleep quality | 1-10 | `(q - 1) / 9 * 10` |
//! | stress level | 1-10 | `(10 - s) / 9 * 10` |
//! | soreness | 1-10 | `(10 - s) / 9 * 10` |
//! | fatigue | 0-100 % | `(100 - f) / 10` |
//!
//! The score is the weighted mean of the components, rounded to one decimal.
//! Because every weight is non-negative, better sleep can never lower the
//! score and more stress, soreness, or fatigue can never raise it.
//!
//! The recommendation is a step function with inclusive lower bounds:
//! `>= 8` intense, `>= 6` moderate, `>= 4` light, otherwise rest.

use crate::config::{ConfigError, ReadinessConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vigor_core::constants::readiness::{
    FATIGUE_MAX, FATIGUE_MIN, INTENSE_THRESHOLD, LIGHT_THRESHOLD, MODERATE_THRESHOLD, SCALE_MAX,
    SCALE_MIN, SCORE_MAX,
};
use vigor_core::errors::ValidationError;
use vigor_core::models::{ReadinessInput, ReadinessResult, ReadinessTier};

/// Per-signal recovery components, each on a 0-10 scale (10 = fully recovered)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessComponents {
    /// Recovery contribution of sleep quality
    pub sleep: f64,
    /// Recovery contribution of low stress
    pub stress: f64,
    /// Recovery contribution of low soreness
    pub soreness: f64,
    /// Recovery contribution of low fatigue
    pub fatigue: f64,
}

/// Readiness calculator
#[derive(Debug, Clone, Default)]
pub struct ReadinessCalculator {
    config: ReadinessConfig,
}

impl ReadinessCalculator {
    /// Create a calculator with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration's weights or limits are invalid
    pub fn new(config: ReadinessConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ReadinessConfig {
        &self.config
    }

    /// Break an input down into its recovery components
    #[must_use]
    pub fn components(input: &ReadinessInput) -> ReadinessComponents {
        let span = f64::from(SCALE_MAX - SCALE_MIN);
        let max = f64::from(SCALE_MAX);
        let min = f64::from(SCALE_MIN);

        ReadinessComponents {
            sleep: (f64::from(input.sleep_quality) - min) / span * SCORE_MAX,
            stress: (max - f64::from(input.stress_level)) / span * SCORE_MAX,
            soreness: (max - f64::from(input.soreness)) / span * SCORE_MAX,
            fatigue: (FATIGUE_MAX - input.fatigue) / FATIGUE_MAX * SCORE_MAX,
        }
    }

    /// Compute the readiness score for an already-validated input
    ///
    /// Deterministic and side-effect free; depends only on the four required signals.
    #[must_use]
    pub fn score(&self, input: &ReadinessInput) -> f64 {
        let c = Self::components(input);
        let w = &self.config.weights;

        let raw = c.fatigue.mul_add(
            w.fatigue_weight,
            c.soreness.mul_add(
                w.soreness_weight,
                c.stress
                    .mul_add(w.stress_weight, c.sleep * w.sleep_weight),
            ),
        );

        ((raw * 10.0).round() / 10.0).clamp(0.0, SCORE_MAX)
    }

    /// Map a score to its recommendation tier
    #[must_use]
    pub fn recommend(score: f64) -> ReadinessTier {
        if score >= INTENSE_THRESHOLD {
            ReadinessTier::Intense
        } else if score >= MODERATE_THRESHOLD {
            ReadinessTier::Moderate
        } else if score >= LIGHT_THRESHOLD {
            ReadinessTier::Light
        } else {
            ReadinessTier::Rest
        }
    }

    /// Check every field of an input against its domain
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field
    pub fn validate(&self, input: &ReadinessInput) -> Result<(), ValidationError> {
        check_scale("sleepQuality", input.sleep_quality)?;
        check_scale("stressLevel", input.stress_level)?;
        check_scale("soreness", input.soreness)?;

        if !input.fatigue.is_finite() {
            return Err(ValidationError::out_of_range(
                "fatigue",
                "must be a finite number",
            ));
        }
        if !(FATIGUE_MIN..=FATIGUE_MAX).contains(&input.fatigue) {
            return Err(ValidationError::out_of_range(
                "fatigue",
                format!(
                    "must be between {FATIGUE_MIN} and {FATIGUE_MAX}, got {}",
                    input.fatigue
                ),
            ));
        }

        let limits = &self.config.limits;
        if input.soreness_zones.len() > limits.max_soreness_zones {
            return Err(ValidationError::out_of_range(
                "sorenessZones",
                format!("at most {} zones allowed", limits.max_soreness_zones),
            ));
        }
        if input.soreness_zones.iter().any(|zone| zone.trim().is_empty()) {
            return Err(ValidationError::out_of_range(
                "sorenessZones",
                "zone labels must not be empty",
            ));
        }

        if let Some(notes) = &input.notes {
            if notes.chars().count() > limits.max_notes_chars {
                return Err(ValidationError::out_of_range(
                    "notes",
                    format!("must be at most {} characters", limits.max_notes_chars),
                ));
            }
        }

        Ok(())
    }

    /// Validate, score, and recommend in one step
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any field is outside its domain
    pub fn assess(&self, input: &ReadinessInput) -> Result<ReadinessResult, ValidationError> {
        self.validate(input)?;
        let score = self.score(input);
        let recommendation = Self::recommend(score);
        debug!(score, tier = %recommendation, "readiness assessed");
        Ok(ReadinessResult {
            score,
            recommendation,
        })
    }
}

fn check_scale(field: &'static str, value: u8) -> Result<(), ValidationError> {
    if (SCALE_MIN..=SCALE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            field,
            format!("must be between {SCALE_MIN} and {SCALE_MAX}, got {value}"),
        ))
    }
}
