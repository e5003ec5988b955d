//! Criterion benchmarks for console_sink

use console_sink::prelude::*;
use console_sink::Formatter;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use std::io;

// ============================================================================
// Entry Construction Benchmarks
// ============================================================================

fn bench_entry_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("single_line", |b| {
        b.iter(|| {
            LogEntry::new(
                LogLevel::Information,
                black_box("Bench.Category"),
                black_box("A single line message"),
                TimestampMode::Local,
            )
        });
    });

    group.bench_function("multi_line", |b| {
        b.iter(|| {
            LogEntry::new(
                LogLevel::Error,
                black_box("Bench.Category"),
                black_box("first line\nsecond line\nthird line\nfourth line"),
                TimestampMode::Utc,
            )
        });
    });

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.throughput(Throughput::Elements(1));

    let entry = LogEntry::with_timestamp(
        "2025-01-08--07.03.09",
        LogLevel::Warning,
        "Bench.Category",
        "line one\nline two",
    );

    let configs = [
        ("plain", SinkOptions::new().with_colors(false)),
        ("colored", SinkOptions::new()),
        ("block", SinkOptions::new().with_multi_line_format(true)),
    ];

    for (name, options) in configs {
        let formatter = Formatter::new(&options);
        group.bench_function(name, |b| {
            b.iter(|| formatter.render(black_box(&entry)));
        });
    }

    group.finish();
}

// ============================================================================
// Submission Benchmarks
// ============================================================================

fn bench_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("submission");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("log_1000_to_sink", |b| {
        b.iter_batched(
            || {
                ConsoleSink::with_appender(
                    SinkOptions::new().with_colors(false),
                    ConsoleAppender::new(io::sink()),
                )
                .expect("sink")
            },
            |sink| {
                let logger = sink.get_logger("Bench").expect("logger");
                for i in 0..1000 {
                    logger.info(format!("message {}", i));
                }
                sink.shutdown();
            },
            BatchSize::PerIteration,
        );
    });

    group.bench_function("filtered_call", |b| {
        let sink = ConsoleSink::with_appender(
            SinkOptions::new().with_min_level(LogLevel::Error),
            ConsoleAppender::new(io::sink()),
        )
        .expect("sink");
        let logger = sink.get_logger("Bench").expect("logger");
        b.iter(|| logger.debug(black_box("never written")));
    });

    group.finish();
}

criterion_group!(benches, bench_entry_creation, bench_rendering, bench_submission);
criterion_main!(benches);
