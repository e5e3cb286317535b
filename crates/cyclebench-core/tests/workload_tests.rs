// Rust guideline compliant 2026-10-15

//! Integration tests for running the workload end to end.

use cyclebench_core::{run_cycles, Error, ProgressReporter, RatingTier};
use std::sync::atomic::AtomicBool;

#[test]
fn test_ten_cycles_complete() {
    let interrupted = AtomicBool::new(false);
    let mut reporter = ProgressReporter::new("Processing", 10, Vec::<u8>::new());

    let outcome = run_cycles(&mut reporter, &interrupted).expect("run should complete");

    assert_eq!(outcome.cycles, 10);
    assert_eq!(reporter.state().current(), 10);
    assert_eq!(reporter.state().total(), 10);

    let text = String::from_utf8(reporter.into_sink()).expect("progress output is UTF-8");
    assert!(text.contains("100.00%"), "final line should reach 100%");
    assert!(text.contains("✅ Completed in"));
}

#[test]
fn test_small_runs_do_not_divide_by_zero() {
    let interrupted = AtomicBool::new(false);
    for cycles in 1..=12 {
        let mut reporter = ProgressReporter::new("Small", cycles, Vec::<u8>::new());
        let outcome = run_cycles(&mut reporter, &interrupted).expect("run should complete");
        assert_eq!(outcome.cycles, cycles);
        assert_eq!(reporter.state().current(), cycles);
    }
}

#[test]
fn test_checkpoints_sampled_per_tenth() {
    let interrupted = AtomicBool::new(false);
    let mut reporter = ProgressReporter::new("Checkpoints", 10_000, std::io::sink());

    let outcome = run_cycles(&mut reporter, &interrupted).expect("run should complete");

    // Updates every 100 cycles, checkpoints every 1,000 excluding cycle 0.
    assert_eq!(outcome.checkpoints.len(), 9);
    assert!(outcome.checkpoints.iter().all(|c| *c >= 0.0));
}

#[test]
fn test_metrics_from_outcome() {
    let interrupted = AtomicBool::new(false);
    let mut reporter = ProgressReporter::new("Metrics", 1_000, std::io::sink());

    let outcome = run_cycles(&mut reporter, &interrupted).expect("run should complete");
    let metrics = outcome.metrics();

    assert!(metrics.total_time_sec > 0.0);
    assert!(metrics.cycles_per_second > 0.0);
    assert!(metrics.rating_tier >= RatingTier::Slow);
    assert!((metrics.seconds_per_cycle * 1_000.0 - metrics.total_time_sec).abs() < 1e-9);
}

#[test]
fn test_interrupt_stops_run() {
    let interrupted = AtomicBool::new(true);
    let mut reporter = ProgressReporter::new("Interrupted", 1_000, Vec::<u8>::new());

    let result = run_cycles(&mut reporter, &interrupted);

    assert!(matches!(result, Err(Error::Interrupted)));
    assert!(reporter.state().current() < 1_000);
}

#[test]
fn test_zero_cycles_rejected() {
    let interrupted = AtomicBool::new(false);
    let mut reporter = ProgressReporter::new("Empty", 0, Vec::<u8>::new());

    let result = run_cycles(&mut reporter, &interrupted);
    assert!(matches!(result, Err(Error::InvalidCycleCount(_))));
}
