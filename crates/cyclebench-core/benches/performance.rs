// Rust guideline compliant 2026-10-15

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cyclebench_core::{predictions_beyond, summarize, ManualClock, ProgressReporter};
use std::io::sink;

fn bench_update(c: &mut Criterion) {
    let clock = ManualClock::new();
    let mut reporter = ProgressReporter::with_clock("Bench", u64::MAX, sink(), &clock);
    let mut current = 0u64;
    c.bench_function("progress_update", |b| {
        b.iter(|| {
            current += 1;
            clock.advance_secs(0.001);
            black_box(reporter.update(current).expect("sink never fails"))
        })
    });
}

fn bench_summarize(c: &mut Criterion) {
    c.bench_function("summarize", |b| {
        b.iter(|| black_box(summarize(black_box(1_000_000), black_box(0.42), black_box(0.4))))
    });
}

fn bench_predictions(c: &mut Criterion) {
    c.bench_function("predictions_beyond", |b| {
        b.iter(|| black_box(predictions_beyond(black_box(1_000), black_box(1e-6))))
    });
}

criterion_group!(benches, bench_update, bench_summarize, bench_predictions);
criterion_main!(benches);
