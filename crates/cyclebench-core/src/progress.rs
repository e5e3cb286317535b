// Rust guideline compliant 2026-10-15

//! Live progress reporting for benchmark runs.
//!
//! [`ProgressReporter`] renders a single carriage-return-overwritten line with a
//! bar, throughput, elapsed time and an ETA. The ETA starts as a linear
//! estimate from overall progress and switches to a moving average of
//! per-cycle samples once two samples exist. The switch can make the ETA jump
//! once early in a run; both values are approximations.

use crate::clock::{Clock, SystemClock};
use crate::format::{format_elapsed, format_eta};
use crate::Result;
use std::collections::VecDeque;
use std::io::Write;
use std::time::Instant;

/// Default number of cells in the progress bar.
pub const DEFAULT_BAR_LENGTH: usize = 40;

/// Maximum number of per-cycle samples kept for the ETA average.
pub const SAMPLE_CAPACITY: usize = 100;

const FILLED_CELL: char = '█';
const EMPTY_CELL: char = '▒';

/// Mutable tracking state for one run.
#[derive(Debug, Clone)]
pub struct ProgressState {
    total: u64,
    current: u64,
    start_time: Instant,
    recent_iteration_durations: VecDeque<f64>,
}

impl ProgressState {
    /// Creates state for a run of `total` cycles starting at `start_time`.
    #[must_use]
    pub fn new(total: u64, start_time: Instant) -> Self {
        Self {
            total,
            current: 0,
            start_time,
            recent_iteration_durations: VecDeque::with_capacity(SAMPLE_CAPACITY),
        }
    }

    /// Total number of cycles in the run.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Most recent value passed to `update`.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Instant the run started.
    #[must_use]
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Recorded per-cycle samples in seconds, oldest first.
    #[must_use]
    pub fn samples(&self) -> &VecDeque<f64> {
        &self.recent_iteration_durations
    }

    /// Mean of the recorded samples, if any exist.
    #[must_use]
    pub fn average_sample(&self) -> Option<f64> {
        if self.recent_iteration_durations.is_empty() {
            return None;
        }
        let sum: f64 = self.recent_iteration_durations.iter().sum();
        Some(sum / self.recent_iteration_durations.len() as f64)
    }

    fn record_sample(&mut self, seconds_per_cycle: f64) {
        if self.recent_iteration_durations.len() == SAMPLE_CAPACITY {
            self.recent_iteration_durations.pop_front();
        }
        self.recent_iteration_durations.push_back(seconds_per_cycle);
    }
}

/// Values computed for one rendered progress line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressFrame {
    /// Cycles completed.
    pub current: u64,
    /// Total cycles.
    pub total: u64,
    /// Completed fraction in `[0, 1]`.
    pub progress: f64,
    /// Number of filled bar cells.
    pub filled_cells: usize,
    /// Total bar cells.
    pub bar_length: usize,
    /// Seconds since the run started.
    pub elapsed_secs: f64,
    /// Cycles per second of elapsed time.
    pub throughput: f64,
    /// Estimated seconds remaining.
    pub eta_secs: f64,
}

impl ProgressFrame {
    /// Completed percentage in `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.progress * 100.0
    }
}

/// Renders a live progress line to an output sink.
///
/// The reporter owns the run's [`ProgressState`]. Callers must pass
/// non-decreasing `current` values to [`ProgressReporter::update`].
pub struct ProgressReporter<W: Write, C: Clock = SystemClock> {
    label: String,
    bar_length: usize,
    state: ProgressState,
    sink: W,
    clock: C,
}

impl<W: Write> ProgressReporter<W, SystemClock> {
    /// Creates a reporter using the system clock, starting now.
    ///
    /// # Arguments
    ///
    /// * `label` - Text shown before the bar
    /// * `total` - Total number of cycles
    /// * `sink` - Writer receiving the rendered lines
    ///
    /// # Returns
    ///
    /// A new ProgressReporter instance.
    pub fn new(label: &str, total: u64, sink: W) -> Self {
        Self::with_clock(label, total, sink, SystemClock)
    }
}

impl<W: Write, C: Clock> ProgressReporter<W, C> {
    /// Creates a reporter reading time from `clock`, starting at `clock.now()`.
    pub fn with_clock(label: &str, total: u64, sink: W, clock: C) -> Self {
        let start = clock.now();
        Self {
            label: label.to_string(),
            bar_length: DEFAULT_BAR_LENGTH,
            state: ProgressState::new(total, start),
            sink,
            clock,
        }
    }

    /// Sets the number of bar cells.
    #[must_use]
    pub fn with_bar_length(mut self, bar_length: usize) -> Self {
        self.bar_length = bar_length;
        self
    }

    /// Read access to the tracking state.
    #[must_use]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Seconds elapsed since the run started.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.clock
            .now()
            .saturating_duration_since(self.state.start_time)
            .as_secs_f64()
    }

    /// Consumes the reporter and returns its sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Renders the progress line for `current` completed cycles.
    ///
    /// After rendering, records `elapsed / current` as a per-cycle sample when
    /// `current > 0`. Samples are cumulative averages, so the smoothed ETA
    /// converges to the run's overall rate instead of following recent speed.
    ///
    /// # Arguments
    ///
    /// * `current` - Cycles completed so far, in `[0, total]`
    ///
    /// # Returns
    ///
    /// The values that were rendered.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn update(&mut self, current: u64) -> Result<ProgressFrame> {
        self.state.current = current;
        let frame = self.compute_frame(current);

        let line = self.render_line(&frame);
        write!(self.sink, "{line}")?;
        self.sink.flush()?;

        if current > 0 {
            self.state.record_sample(frame.elapsed_secs / current as f64);
        }

        Ok(frame)
    }

    /// Renders the final 100% line followed by a completion message.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn finish(&mut self) -> Result<ProgressFrame> {
        let frame = self.update(self.state.total)?;
        let elapsed = self.elapsed_secs();
        writeln!(self.sink)?;
        writeln!(self.sink, "✅ Completed in {}", format_elapsed(elapsed))?;
        self.sink.flush()?;
        Ok(frame)
    }

    fn compute_frame(&self, current: u64) -> ProgressFrame {
        let total = self.state.total;
        let (progress, filled_cells) = if total == 0 {
            (1.0, self.bar_length)
        } else {
            let clamped = current.min(total);
            let filled = (self.bar_length as u128 * clamped as u128 / total as u128) as usize;
            ((current as f64 / total as f64).min(1.0), filled)
        };

        let elapsed_secs = self.elapsed_secs();
        let (throughput, eta_secs) = if elapsed_secs > 0.0 {
            let throughput = current as f64 / elapsed_secs;
            let eta = if self.state.samples().len() >= 2 {
                match self.state.average_sample() {
                    Some(avg) if current > 0 => avg * total.saturating_sub(current) as f64,
                    _ => 0.0,
                }
            } else if progress > 0.0 {
                elapsed_secs * (1.0 - progress) / progress
            } else {
                0.0
            };
            (throughput, eta)
        } else {
            (0.0, 0.0)
        };

        ProgressFrame {
            current,
            total,
            progress,
            filled_cells,
            bar_length: self.bar_length,
            elapsed_secs,
            throughput,
            eta_secs,
        }
    }

    fn render_line(&self, frame: &ProgressFrame) -> String {
        let bar = render_bar(frame.filled_cells, frame.bar_length);
        let clock = chrono::Local::now().format("%H:%M:%S");
        format!(
            "\r⏳ {} |{}| {:6.2}% | ⚡ {:7.0}/s | 🕐 {} | 🎯 ETA: {} | 🕒 {}",
            self.label,
            bar,
            frame.percent(),
            frame.throughput,
            format_elapsed(frame.elapsed_secs),
            format_eta(frame.eta_secs),
            clock
        )
    }
}

/// Builds a bar of `filled` solid cells padded with empty cells to `length`.
#[must_use]
pub fn render_bar(filled: usize, length: usize) -> String {
    let filled = filled.min(length);
    let mut bar = String::with_capacity(length * FILLED_CELL.len_utf8());
    bar.extend(std::iter::repeat(FILLED_CELL).take(filled));
    bar.extend(std::iter::repeat(EMPTY_CELL).take(length - filled));
    bar
}
