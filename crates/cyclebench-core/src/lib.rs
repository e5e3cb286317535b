// Rust guideline compliant 2026-10-15

//! Cyclebench Core Library
//!
//! This crate provides the measurement side of the cyclebench tool:
//! - Live progress reporting with throughput and ETA
//! - Performance metrics and throughput rating
//! - Linear run-time predictions
//! - Duration and count formatting
//! - The placeholder workload runner
//! - Configuration and error types

pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod metrics;
pub mod predict;
pub mod progress;
pub mod workload;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use format::{format_count, format_duration_ns, format_elapsed, format_eta, format_rate};
pub use metrics::{summarize, PerformanceMetrics, RatingTier};
pub use predict::{predict, predictions_beyond, Prediction, PredictionTier, STANDARD_CYCLE_COUNTS};
pub use progress::{ProgressFrame, ProgressReporter, ProgressState, DEFAULT_BAR_LENGTH};
pub use workload::{run_cycles, RunOutcome};
