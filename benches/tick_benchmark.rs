#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for encoding, normalization and tick chart rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tally_viz::prelude::*;

fn encode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let text = "the quick brown fox jumps over the lazy dog ".repeat(100);

    group.bench_function("binary", |b| b.iter(|| binary_ticks(black_box(&text))));
    group.bench_function("morse", |b| b.iter(|| morse_ticks(black_box(&text))));

    group.finish();
}

fn normalize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [100, 10_000, 1_000_000] {
        let values: Vec<f32> = (1..=size).map(|i| (i as f32 * 0.37).sin().abs() + 1.0).collect();

        group.bench_with_input(BenchmarkId::new("linear", size), &size, |b, _| {
            b.iter(|| normalize(black_box(&values), 0.5, 3.0).expect("values are non-empty"));
        });
        group.bench_with_input(BenchmarkId::new("log10", size), &size, |b, _| {
            b.iter(|| {
                Normalizer::default()
                    .normalize_with(black_box(&values), Transform::Log10)
                    .expect("values are positive")
            });
        });
    }

    group.finish();
}

fn tick_chart_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_chart");

    for size in [10, 100, 1_000] {
        let lengths: Vec<f32> = (0..size).map(|i| 0.5 + (i % 6) as f32 * 0.5).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let chart = TickChart::new()
                    .lengths(black_box(&lengths))
                    .dimensions(1600, 400)
                    .build()
                    .expect("builder should produce valid result");

                chart.to_framebuffer().expect("framebuffer conversion should succeed")
            });
        });
    }

    group.finish();
}

fn solar_system_svg_benchmark(c: &mut Criterion) {
    let chart = Preset::SolarSystemLn.illustration().chart().expect("preset should build");

    c.bench_function("solar_system_svg", |b| {
        b.iter(|| black_box(&chart).to_svg().expect("svg should render").render());
    });
}

criterion_group!(
    benches,
    encode_benchmark,
    normalize_benchmark,
    tick_chart_benchmark,
    solar_system_svg_benchmark
);
criterion_main!(benches);
