// ABOUTME: Criterion benchmarks for the readiness engine
// ABOUTME: Measures scoring, validation, and batch assessment throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the readiness engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vigor::intelligence::ReadinessCalculator;
use vigor::models::ReadinessInput;

/// Deterministic spread of valid inputs covering the whole scale
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_inputs(count: usize) -> Vec<ReadinessInput> {
    (0..count)
        .map(|index| {
            let sleep = 1 + (index * 7 % 10) as u8;
            let stress = 1 + (index * 3 % 10) as u8;
            let soreness = 1 + (index * 11 % 10) as u8;
            let fatigue = (index * 37 % 1001) as f64 / 10.0;
            let input = ReadinessInput::new(sleep, stress, soreness, fatigue);
            if index % 3 == 0 {
                input.with_zones(["quads", "calves"]).with_notes("heavy legs")
            } else {
                input
            }
        })
        .collect()
}

fn bench_score(c: &mut Criterion) {
    let calculator = ReadinessCalculator::default();
    let input = ReadinessInput::new(8, 3, 2, 20.0);

    c.bench_function("readiness_score", |b| {
        b.iter(|| calculator.score(black_box(&input)));
    });
    c.bench_function("readiness_validate", |b| {
        b.iter(|| calculator.validate(black_box(&input)));
    });
}

fn bench_assess_batch(c: &mut Criterion) {
    let calculator = ReadinessCalculator::default();
    let mut group = c.benchmark_group("readiness_assess");

    for count in [10_usize, 100, 1000] {
        let inputs = generate_inputs(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &inputs, |b, inputs| {
            b.iter(|| {
                inputs
                    .iter()
                    .filter_map(|input| calculator.assess(black_box(input)).ok())
                    .map(|result| result.score)
                    .sum::<f64>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score, bench_assess_batch);
criterion_main!(benches);
