// Rust guideline compliant 2026-10-15

//! Placeholder workload execution with timing capture.

use crate::clock::Clock;
use crate::metrics::{summarize, PerformanceMetrics};
use crate::progress::ProgressReporter;
use crate::{Error, Result};
use cpu_time::ProcessTime;
use serde::Serialize;
use std::hint::black_box;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Upper bound on cycles between progress updates.
const MAX_BATCH: u64 = 10_000;

/// Timing captured from one run of the workload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    /// Cycles executed.
    pub cycles: u64,
    /// Wall-clock duration of the run.
    pub wall_time: Duration,
    /// Process CPU time consumed during the run.
    pub cpu_time: Duration,
    /// Seconds per cycle sampled at every tenth of the run.
    pub checkpoints: Vec<f64>,
}

impl RunOutcome {
    /// Wall-clock duration in nanoseconds.
    #[must_use]
    pub fn wall_time_ns(&self) -> f64 {
        self.wall_time.as_nanos() as f64
    }

    /// Derives the run's performance metrics.
    #[must_use]
    pub fn metrics(&self) -> PerformanceMetrics {
        summarize(
            self.cycles,
            self.wall_time.as_secs_f64(),
            self.cpu_time.as_secs_f64(),
        )
    }
}

/// Computes the placeholder value for cycle `index`.
#[must_use]
pub fn cycle_value(index: u64) -> f64 {
    if index == 0 {
        return 0.0;
    }
    let x = index as f64;
    x.sqrt() * (x + 1.0).ln()
}

/// Number of cycles between progress updates: 1% of the run, capped at 10,000.
#[must_use]
pub fn batch_size(num_cycles: u64) -> u64 {
    (num_cycles / 100).clamp(1, MAX_BATCH)
}

/// Number of cycles between checkpoint samples: a tenth of the run.
#[must_use]
pub fn checkpoint_interval(num_cycles: u64) -> u64 {
    (num_cycles / 10).max(1)
}

/// Executes `reporter.state().total()` cycles, driving the reporter as it goes.
///
/// The interrupt flag is polled at every progress update.
///
/// # Arguments
///
/// * `reporter` - Reporter sized for the run
/// * `interrupted` - Flag set when the user asks to stop
///
/// # Returns
///
/// The captured wall time, CPU time and checkpoints.
///
/// # Errors
///
/// Returns an error if:
/// - The run has zero cycles
/// - The interrupt flag is set before the run completes
/// - Process CPU time cannot be read
/// - Writing progress output fails
pub fn run_cycles<W: Write, C: Clock>(
    reporter: &mut ProgressReporter<W, C>,
    interrupted: &AtomicBool,
) -> Result<RunOutcome> {
    let num_cycles = reporter.state().total();
    if num_cycles == 0 {
        return Err(Error::InvalidCycleCount(
            "number of cycles must be positive".to_string(),
        ));
    }

    let batch = batch_size(num_cycles);
    let interval = checkpoint_interval(num_cycles);
    info!(cycles = num_cycles, batch, "starting run");

    let start_cpu = ProcessTime::try_now()?;
    let start = Instant::now();
    let mut checkpoint_start = start;
    let mut checkpoints = Vec::with_capacity(10);

    for i in 0..num_cycles {
        black_box(cycle_value(black_box(i)));

        if i % batch == 0 || i == num_cycles - 1 {
            if interrupted.load(Ordering::Relaxed) {
                warn!(completed = i, "run interrupted");
                return Err(Error::Interrupted);
            }

            reporter.update(i + 1)?;

            if i > 0 && i % interval == 0 {
                let now = Instant::now();
                let per_cycle = (now - checkpoint_start).as_secs_f64() / batch as f64;
                checkpoint_start = now;
                debug!(cycle = i, per_cycle, "checkpoint");
                checkpoints.push(per_cycle);
            }
        }
    }

    reporter.finish()?;

    let wall_time = start.elapsed();
    let cpu_time = start_cpu.try_elapsed()?;
    info!(
        cycles = num_cycles,
        wall_ns = wall_time.as_nanos() as u64,
        "run complete"
    );

    Ok(RunOutcome {
        cycles: num_cycles,
        wall_time,
        cpu_time,
        checkpoints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_value() {
        assert_eq!(cycle_value(0), 0.0);
        let expected = 2.0 * 5.0f64.ln();
        assert!((cycle_value(4) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_batch_size_bounds() {
        assert_eq!(batch_size(1), 1);
        assert_eq!(batch_size(99), 1);
        assert_eq!(batch_size(500), 5);
        assert_eq!(batch_size(1_000_000), 10_000);
        assert_eq!(batch_size(100_000_000), 10_000);
    }

    #[test]
    fn test_checkpoint_interval_never_zero() {
        assert_eq!(checkpoint_interval(1), 1);
        assert_eq!(checkpoint_interval(9), 1);
        assert_eq!(checkpoint_interval(10), 1);
        assert_eq!(checkpoint_interval(1_000), 100);
    }

    #[test]
    fn test_run_outcome_metrics() {
        let outcome = RunOutcome {
            cycles: 1_000,
            wall_time: Duration::from_secs(2),
            cpu_time: Duration::from_secs(1),
            checkpoints: Vec::new(),
        };
        let metrics = outcome.metrics();
        assert_eq!(metrics.cycles_per_second, 500.0);
        assert_eq!(metrics.cpu_efficiency_pct, 50.0);
        assert_eq!(outcome.wall_time_ns(), 2e9);
    }
}
