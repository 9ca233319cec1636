//! Criterion benchmarks for rust_field_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_field_logger::prelude::*;
use std::io;
use std::sync::Arc;

fn sink_logger() -> Logger {
    Logger::builder()
        .output(io::sink())
        .level(LogLevel::Debug)
        .colored(false)
        .build()
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_text_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_logging");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger();
    let with_fields = logger
        .with_field("user_id", 42)
        .with_field("path", "/api/v1/items")
        .with_field("password", "hunter2");

    group.bench_function("plain", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("formatted", |b| {
        b.iter(|| logger.info(format_args!("Request {} took {}ms", black_box(7), black_box(12))));
    });

    group.bench_function("with_fields", |b| {
        b.iter(|| with_fields.info(black_box("Info message")));
    });

    logger.set_colored(true);
    group.bench_function("colored", |b| {
        b.iter(|| logger.warn(black_box("Warn message")));
    });

    group.finish();
}

fn bench_json_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_logging");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger();
    logger.set_structured(true);
    let with_fields = logger.with_fields(vec![
        ("user_id", FieldValue::from(42)),
        ("latency", FieldValue::from(1.5)),
        ("ok", FieldValue::from(true)),
    ]);

    group.bench_function("plain", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("with_fields", |b| {
        b.iter(|| with_fields.info(black_box("Info message")));
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger();
    logger.set_level(LogLevel::Error);

    group.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(format_args!("Filtered {}", black_box(1))));
    });

    group.bench_function("passed_error", |b| {
        b.iter(|| logger.error(black_box("Error message")));
    });

    group.finish();
}

// ============================================================================
// Field Chaining Benchmarks
// ============================================================================

fn bench_field_chaining(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_chaining");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger();
    let wide = logger.with_fields((0..16).map(|i| (format!("key_{}", i), i)));

    group.bench_function("with_field_empty_parent", |b| {
        b.iter(|| black_box(logger.with_field("request_id", "abc")));
    });

    group.bench_function("with_field_wide_parent", |b| {
        b.iter(|| black_box(wide.with_field("request_id", "abc")));
    });

    group.finish();
}

// ============================================================================
// Concurrency Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            let logger = Arc::new(sink_logger());
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for i in 0..100 {
                                logger.info(format_args!("Message {}", i));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_text_logging,
    bench_json_logging,
    bench_level_filtering,
    bench_field_chaining,
    bench_concurrent_logging,
);

criterion_main!(benches);
