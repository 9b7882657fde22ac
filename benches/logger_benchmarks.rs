//! Criterion benchmarks for rust_format_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_format_logger::core::{inspect, InspectOptions};
use rust_format_logger::prelude::*;
use std::io;

fn sink_logger(colors: bool) -> Logger {
    Logger::builder()
        .min_level(LogLevel::Debug)
        .colors(colors)
        .stdout(io::sink())
        .stderr(io::sink())
        .build()
}

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("console", |b| {
        b.iter(|| black_box(sink_logger(false)));
    });

    group.bench_function("format_registry", |b| {
        let overrides = FormatOptions::new()
            .with(LogLevel::Warn, LevelOptions::new().with_infix("! "));
        b.iter(|| {
            black_box(FormatRegistry::build_with_styling(
                black_box(&overrides),
                None,
                true,
            ))
        });
    });

    group.finish();
}

// ============================================================================
// Write Benchmarks
// ============================================================================

fn bench_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("writes");
    group.throughput(Throughput::Elements(1));

    let plain = sink_logger(false);
    let styled = sink_logger(true);

    group.bench_function("single_string", |b| {
        let values = [Value::from("Info message")];
        b.iter(|| plain.info(black_box(&values)));
    });

    group.bench_function("mixed_values_styled", |b| {
        let values = [
            Value::from("request"),
            Value::from(200),
            Value::map([("path", "/health"), ("method", "GET")]),
        ];
        b.iter(|| styled.info(black_box(&values)));
    });

    group.bench_function("filtered", |b| {
        let values = [Value::from("Dropped message")];
        b.iter(|| plain.trace(black_box(&values)));
    });

    group.finish();
}

// ============================================================================
// Inspection Benchmarks
// ============================================================================

fn bench_inspect(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect");

    let nested = Value::map([
        ("id", Value::from(42)),
        ("tags", Value::from(vec!["a", "b", "c"])),
        (
            "owner",
            Value::map([("name", Value::from("ops")), ("active", Value::from(true))]),
        ),
    ]);
    let long_list = Value::from((0..500).collect::<Vec<u32>>());

    for depth in [0usize, 2] {
        group.bench_function(format!("nested_depth_{}", depth), |b| {
            let options = InspectOptions::new(depth, false);
            b.iter(|| inspect(black_box(&nested), &options));
        });
    }

    group.bench_function("long_list", |b| {
        let options = InspectOptions::new(0, true);
        b.iter(|| inspect(black_box(&long_list), &options));
    });

    group.finish();
}

criterion_group!(benches, bench_logger_creation, bench_writes, bench_inspect);
criterion_main!(benches);
