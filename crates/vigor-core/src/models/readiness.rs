// ABOUTME: Readiness check-in data models: daily inputs, score result, and tier
// ABOUTME: Wire format uses camelCase field names and upper-case tier names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Self-reported recovery inputs for one user on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessInput {
    /// Sleep quality, 1 (terrible) to 10 (excellent)
    pub sleep_quality: u8,
    /// Stress level, 1 (calm) to 10 (overwhelmed)
    pub stress_level: u8,
    /// Muscle soreness, 1 (none) to 10 (severe)
    pub soreness: u8,
    /// Perceived fatigue percentage, 0 to 100
    pub fatigue: f64,
    /// Body regions reported as sore
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub soreness_zones: BTreeSet<String>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReadinessInput {
    /// Create an input with only the four required signals
    #[must_use]
    pub const fn new(sleep_quality: u8, stress_level: u8, soreness: u8, fatigue: f64) -> Self {
        Self {
            sleep_quality,
            stress_level,
            soreness,
            fatigue,
            soreness_zones: BTreeSet::new(),
            notes: None,
        }
    }

    /// Attach soreness zones
    #[must_use]
    pub fn with_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.soreness_zones = zones.into_iter().map(Into::into).collect();
        self
    }

    /// Attach free-text notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Loosely-typed form as it arrives from a client, before required fields are checked
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessForm {
    /// Sleep quality, if provided
    pub sleep_quality: Option<u8>,
    /// Stress level, if provided
    pub stress_level: Option<u8>,
    /// Soreness, if provided
    pub soreness: Option<u8>,
    /// Fatigue percentage, if provided
    pub fatigue: Option<f64>,
    /// Sore body regions
    #[serde(default)]
    pub soreness_zones: Vec<String>,
    /// Free-text notes
    pub notes: Option<String>,
}

impl TryFrom<ReadinessForm> for ReadinessInput {
    type Error = ValidationError;

    fn try_from(form: ReadinessForm) -> Result<Self, Self::Error> {
        let sleep_quality = form
            .sleep_quality
            .ok_or_else(|| ValidationError::missing("sleepQuality"))?;
        let stress_level = form
            .stress_level
            .ok_or_else(|| ValidationError::missing("stressLevel"))?;
        let soreness = form
            .soreness
            .ok_or_else(|| ValidationError::missing("soreness"))?;
        let fatigue = form
            .fatigue
            .ok_or_else(|| ValidationError::missing("fatigue"))?;

        let notes = form.notes.filter(|n| !n.trim().is_empty());

        Ok(Self {
            sleep_quality,
            stress_level,
            soreness,
            fatigue,
            soreness_zones: form.soreness_zones.into_iter().collect(),
            notes,
        })
    }
}

/// Discrete training-intensity guidance derived from the readiness score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReadinessTier {
    /// Recovery debt is high; take the day off
    Rest,
    /// Easy movement only
    Light,
    /// Normal training at moderate intensity
    Moderate,
    /// Fully recovered; hard sessions are appropriate
    Intense,
}

impl ReadinessTier {
    /// Upper-case wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rest => "REST",
            Self::Light => "LIGHT",
            Self::Moderate => "MODERATE",
            Self::Intense => "INTENSE",
        }
    }

    /// One-line training guidance for this tier
    #[must_use]
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::Rest => "Take a rest day: prioritize sleep, hydration, and gentle mobility",
            Self::Light => "Keep it light: easy cardio, technique work, or stretching",
            Self::Moderate => "Train as planned at moderate intensity and monitor how you feel",
            Self::Intense => "You're well recovered: a good day for a hard or high-volume session",
        }
    }
}

impl fmt::Display for ReadinessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadinessTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "REST" => Ok(Self::Rest),
            "LIGHT" => Ok(Self::Light),
            "MODERATE" => Ok(Self::Moderate),
            "INTENSE" => Ok(Self::Intense),
            other => Err(AppError::invalid_input(format!(
                "unknown readiness tier: {other}"
            ))),
        }
    }
}

/// Score and tier computed from one [`ReadinessInput`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessResult {
    /// Readiness score on a 0-10 scale
    pub score: f64,
    /// Recommended training tier
    pub recommendation: ReadinessTier,
}

/// Stored daily check-in, at most one per `(user_id, checkin_date)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessCheckin {
    /// Owning user
    pub user_id: Uuid,
    /// Calendar day the check-in belongs to
    pub checkin_date: NaiveDate,
    /// Submitted inputs
    pub input: ReadinessInput,
    /// Derived score and tier
    pub result: ReadinessResult,
    /// First submission time for this day
    pub created_at: DateTime<Utc>,
    /// Most recent submission time for this day
    pub updated_at: DateTime<Utc>,
}
