// ABOUTME: Unit tests for the readiness calculator
// ABOUTME: Tests scoring determinism, monotonicity, tier boundaries, and input validation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vigor::errors::{AppError, ErrorCode};
use vigor::intelligence::config::{ReadinessLimits, ReadinessWeights};
use vigor::intelligence::{ConfigError, ReadinessCalculator, ReadinessConfig};
use vigor::models::{ReadinessForm, ReadinessInput, ReadinessTier};

fn calculator() -> ReadinessCalculator {
    ReadinessCalculator::default()
}

fn field_of(input: &ReadinessInput) -> &'static str {
    calculator()
        .validate(input)
        .expect_err("input should be rejected")
        .field
}

// ============================================================================
// Scoring
// ============================================================================

#[test]
fn test_fully_recovered_scores_ten() {
    let result = calculator()
        .assess(&ReadinessInput::new(10, 1, 1, 0.0))
        .unwrap();
    assert!((result.score - 10.0).abs() < f64::EPSILON);
    assert_eq!(result.recommendation, ReadinessTier::Intense);
}

#[test]
fn test_exhausted_scores_zero() {
    let result = calculator()
        .assess(&ReadinessInput::new(1, 10, 10, 100.0))
        .unwrap();
    assert!(result.score.abs() < f64::EPSILON);
    assert_eq!(result.recommendation, ReadinessTier::Rest);
}

#[test]
fn test_typical_good_day() {
    let result = calculator()
        .assess(&ReadinessInput::new(8, 3, 2, 20.0))
        .unwrap();
    assert!((result.score - 8.1).abs() < 1e-9, "got {}", result.score);
    assert_eq!(result.recommendation, ReadinessTier::Intense);
}

#[test]
fn test_score_is_deterministic() {
    let input = ReadinessInput::new(6, 4, 5, 37.5);
    let calc = calculator();
    let first = calc.assess(&input).unwrap();
    for _ in 0..10 {
        assert_eq!(calc.assess(&input).unwrap(), first);
    }
}

#[test]
fn test_optional_fields_do_not_affect_score() {
    let calc = calculator();
    let bare = ReadinessInput::new(7, 5, 6, 45.0);
    let annotated = bare
        .clone()
        .with_zones(["quads", "lower back"])
        .with_notes("long run yesterday");
    assert_eq!(calc.assess(&bare).unwrap(), calc.assess(&annotated).unwrap());
}

#[test]
fn test_score_monotone_in_each_signal() {
    let calc = calculator();
    for base in [1_u8, 3, 5, 7, 9] {
        let reference = ReadinessInput::new(base, base, base, f64::from(base) * 10.0);
        let reference_score = calc.score(&reference);

        let better_sleep = ReadinessInput {
            sleep_quality: base + 1,
            ..reference.clone()
        };
        let more_stress = ReadinessInput {
            stress_level: base + 1,
            ..reference.clone()
        };
        let more_soreness = ReadinessInput {
            soreness: base + 1,
            ..reference.clone()
        };
        let more_fatigue = ReadinessInput {
            fatigue: reference.fatigue + 10.0,
            ..reference.clone()
        };

        assert!(calc.score(&better_sleep) >= reference_score);
        assert!(calc.score(&more_stress) <= reference_score);
        assert!(calc.score(&more_soreness) <= reference_score);
        assert!(calc.score(&more_fatigue) <= reference_score);
    }
}

#[test]
fn test_score_always_within_bounds() {
    let calc = calculator();
    for sleep in 1..=10 {
        for stress in 1..=10 {
            for fatigue in [0.0, 33.3, 50.0, 99.9, 100.0] {
                let score = calc.score(&ReadinessInput::new(sleep, stress, 11 - stress, fatigue));
                assert!((0.0..=10.0).contains(&score), "score {score} out of range");
                let tenths = score * 10.0;
                assert!((tenths - tenths.round()).abs() < 1e-9, "not rounded: {score}");
            }
        }
    }
}

#[test]
fn test_components_breakdown() {
    let c = ReadinessCalculator::components(&ReadinessInput::new(10, 10, 1, 50.0));
    assert!((c.sleep - 10.0).abs() < 1e-9);
    assert!(c.stress.abs() < 1e-9);
    assert!((c.soreness - 10.0).abs() < 1e-9);
    assert!((c.fatigue - 5.0).abs() < 1e-9);
}

// ============================================================================
// Tiers
// ============================================================================

#[test]
fn test_tier_boundaries_are_inclusive_lower_bounds() {
    assert_eq!(ReadinessCalculator::recommend(10.0), ReadinessTier::Intense);
    assert_eq!(ReadinessCalculator::recommend(8.0), ReadinessTier::Intense);
    assert_eq!(ReadinessCalculator::recommend(7.999), ReadinessTier::Moderate);
    assert_eq!(ReadinessCalculator::recommend(6.0), ReadinessTier::Moderate);
    assert_eq!(ReadinessCalculator::recommend(5.999), ReadinessTier::Light);
    assert_eq!(ReadinessCalculator::recommend(4.0), ReadinessTier::Light);
    assert_eq!(ReadinessCalculator::recommend(3.999), ReadinessTier::Rest);
    assert_eq!(ReadinessCalculator::recommend(0.0), ReadinessTier::Rest);
}

#[test]
fn test_tier_monotone_in_score() {
    let mut previous = ReadinessTier::Rest;
    for tenths in 0..=100 {
        let tier = ReadinessCalculator::recommend(f64::from(tenths) / 10.0);
        assert!(tier >= previous);
        previous = tier;
    }
}

#[test]
fn test_tier_wire_names() {
    assert_eq!(
        serde_json::to_string(&ReadinessTier::Moderate).unwrap(),
        "\"MODERATE\""
    );
    assert_eq!("light".parse::<ReadinessTier>().unwrap(), ReadinessTier::Light);
    let err: AppError = "sprint".parse::<ReadinessTier>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_out_of_range_inputs_name_the_field() {
    assert_eq!(field_of(&ReadinessInput::new(0, 5, 5, 50.0)), "sleepQuality");
    assert_eq!(field_of(&ReadinessInput::new(11, 5, 5, 50.0)), "sleepQuality");
    assert_eq!(field_of(&ReadinessInput::new(5, 0, 5, 50.0)), "stressLevel");
    assert_eq!(field_of(&ReadinessInput::new(5, 5, 11, 50.0)), "soreness");
    assert_eq!(field_of(&ReadinessInput::new(5, 5, 5, -0.1)), "fatigue");
    assert_eq!(field_of(&ReadinessInput::new(5, 5, 5, 100.5)), "fatigue");
    assert_eq!(field_of(&ReadinessInput::new(5, 5, 5, f64::NAN)), "fatigue");
}

#[test]
fn test_scale_bounds_are_accepted() {
    let calc = calculator();
    assert!(calc.validate(&ReadinessInput::new(1, 1, 1, 0.0)).is_ok());
    assert!(calc.validate(&ReadinessInput::new(10, 10, 10, 100.0)).is_ok());
}

#[test]
fn test_optional_field_limits() {
    let too_long = ReadinessInput::new(5, 5, 5, 50.0).with_notes("x".repeat(1001));
    assert_eq!(field_of(&too_long), "notes");

    let blank_zone = ReadinessInput::new(5, 5, 5, 50.0).with_zones(["  "]);
    assert_eq!(field_of(&blank_zone), "sorenessZones");
}

#[test]
fn test_validation_error_maps_to_value_out_of_range() {
    let err = calculator()
        .assess(&ReadinessInput::new(5, 12, 5, 50.0))
        .unwrap_err();
    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ValueOutOfRange);
    assert_eq!(app.details["field"], "stressLevel");
}

#[test]
fn test_form_missing_required_field() {
    let form = ReadinessForm {
        sleep_quality: Some(7),
        stress_level: Some(4),
        soreness: None,
        fatigue: Some(30.0),
        ..ReadinessForm::default()
    };
    let err = ReadinessInput::try_from(form).unwrap_err();
    assert_eq!(err.field, "soreness");
    assert!(err.missing);
    assert_eq!(AppError::from(err).code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_form_drops_blank_notes() {
    let form = ReadinessForm {
        sleep_quality: Some(7),
        stress_level: Some(4),
        soreness: Some(3),
        fatigue: Some(30.0),
        soreness_zones: vec!["calves".into(), "calves".into()],
        notes: Some("   ".into()),
    };
    let input = ReadinessInput::try_from(form).unwrap();
    assert_eq!(input.notes, None);
    assert_eq!(input.soreness_zones.len(), 1);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_custom_weights_shift_score() {
    let config = ReadinessConfig {
        weights: ReadinessWeights {
            sleep_weight: 1.0,
            stress_weight: 0.0,
            soreness_weight: 0.0,
            fatigue_weight: 0.0,
        },
        limits: ReadinessLimits::default(),
    };
    let calc = ReadinessCalculator::new(config).unwrap();
    let score = calc.score(&ReadinessInput::new(10, 10, 10, 100.0));
    assert!((score - 10.0).abs() < f64::EPSILON);
}

#[test]
fn test_invalid_weights_rejected() {
    let config = ReadinessConfig {
        weights: ReadinessWeights {
            sleep_weight: 0.5,
            stress_weight: 0.5,
            soreness_weight: 0.5,
            fatigue_weight: 0.0,
        },
        limits: ReadinessLimits::default(),
    };
    assert!(matches!(
        ReadinessCalculator::new(config),
        Err(ConfigError::InvalidWeights(_))
    ));
}
