// Rust guideline compliant 2026-10-15

//! Output formatting module for the cyclebench CLI.
//!
//! This module renders the run introduction and the final performance report
//! in the supported output formats (table, plain text, JSON).

use chrono::{DateTime, Local};
use cyclebench_core::{
    format_count, format_duration_ns, format_rate, predictions_beyond, OutputFormat,
    PerformanceMetrics, Prediction, RunOutcome,
};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const KEY_WIDTH: usize = 25;
const SECTION_RULE_WIDTH: usize = 50;

/// Everything shown in the final report of a completed run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Captured timings.
    pub outcome: RunOutcome,
    /// Metrics derived from the timings.
    pub metrics: PerformanceMetrics,
    /// Predictions for standard counts above the executed count.
    pub predictions: Vec<Prediction>,
    /// Local time the run started.
    pub started_at: DateTime<Local>,
    /// Local time the run finished.
    pub completed_at: DateTime<Local>,
}

impl Report {
    /// Builds the report for a finished run.
    pub fn new(
        outcome: RunOutcome,
        started_at: DateTime<Local>,
        completed_at: DateTime<Local>,
    ) -> Self {
        let metrics = outcome.metrics();
        let predictions = predictions_beyond(outcome.cycles, metrics.seconds_per_cycle);
        Self {
            outcome,
            metrics,
            predictions,
            started_at,
            completed_at,
        }
    }

    /// Fastest and slowest checkpoint, in seconds per cycle.
    pub fn checkpoint_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.outcome.checkpoints.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c))))
    }
}

/// Warning text for runs above the confirmation threshold.
///
/// The time hint assumes a conservative one million cycles per second and is
/// only shown when it exceeds ten seconds.
pub fn large_run_notice(cycles: u64) -> String {
    let mut output = format!(
        "Large number of cycles detected! ({})\n",
        format_count(cycles)
    );
    let estimated = cycles as f64 / 1_000_000.0;
    if estimated > 10.0 {
        output.push_str(&format!(
            "⚠️  This may take approximately {estimated:.1} seconds or more\n"
        ));
    }
    output
}

/// Platform string shown in the system information section.
pub fn platform() -> String {
    format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Output formatter trait.
///
/// Defines the interface for rendering run output in different formats.
pub trait OutputFormatter {
    /// Formats the greeting shown before the cycle count prompt.
    fn format_welcome(&self) -> String {
        String::new()
    }

    /// Formats the text shown before the run starts.
    fn format_intro(&self, cycles: u64, started_at: DateTime<Local>) -> String;

    /// Formats the final report.
    fn format_report(&self, report: &Report) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;

    /// Formats the notice shown before asking to confirm a large run.
    fn format_large_run_warning(&self, cycles: u64) -> String {
        large_run_notice(cycles)
    }

    /// Whether prompts and the live progress line belong on stderr.
    fn interactive_on_stderr(&self) -> bool {
        false
    }
}

/// Decorated formatter with banners, sections and symbols.
pub struct TableFormatter {
    width: usize,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `width` - Width of banner rules in columns
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    fn header(&self, text: &str, emoji: &str) -> String {
        let rule = "═".repeat(self.width);
        let inner = self.width.saturating_sub(6);
        format!("\n{rule}\n{emoji} {text:^inner$} {emoji}\n{rule}\n")
    }

    fn format_predictions(&self, predictions: &[Prediction]) -> String {
        if predictions.is_empty() {
            return "   No larger cycle counts to predict.\n".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Cycles", "Estimated Time", ""]);
        for prediction in predictions {
            builder.push_record(vec![
                format_count(prediction.cycles),
                prediction.formatted_time(),
                prediction.tier().symbol().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        format!("{table}\n")
    }
}

fn section(title: &str, emoji: &str) -> String {
    format!("\n{emoji} {title}\n{}\n", "─".repeat(SECTION_RULE_WIDTH))
}

fn info(key: &str, value: &str, emoji: &str) -> String {
    format!("   {emoji} {key:<width$}: {value}\n", width = KEY_WIDTH)
}

impl OutputFormatter for TableFormatter {
    fn format_welcome(&self) -> String {
        let mut output = self.header("CYCLE EXECUTION TIME ANALYZER", "🔬");
        output.push_str("Runs a number of placeholder cycles and measures how long they take,\n");
        output.push_str("then reports throughput, CPU efficiency and predictions for larger runs.\n\n");
        output
    }

    fn format_intro(&self, cycles: u64, started_at: DateTime<Local>) -> String {
        let mut output = self.header(&format!("EXECUTING {} CYCLES", format_count(cycles)), "🚀");
        output.push_str(&section("EXECUTION INFORMATION", "⚙️"));
        output.push_str(&info(
            "Start Time",
            &started_at.format(TIMESTAMP_FORMAT).to_string(),
            "🕒",
        ));
        output.push_str(&info("Total Cycles", &format_count(cycles), "🔢"));
        output.push_str(&info("Estimated Memory", "Minimal", "💾"));
        output.push_str(&section("REAL-TIME PROGRESS", "📈"));
        output
    }

    fn format_report(&self, report: &Report) -> String {
        let metrics = &report.metrics;
        let mut output = self.header("DETAILED PERFORMANCE RESULTS", "📊");

        output.push_str(&section("TIMING INFORMATION", "⏱️"));
        output.push_str(&info(
            "Total Execution Time",
            &format_duration_ns(report.outcome.wall_time_ns()),
            "⏰",
        ));
        output.push_str(&info(
            "CPU Processing Time",
            &format!("{:.6} s", metrics.cpu_time_sec),
            "⚡",
        ));
        output.push_str(&info(
            "Wall Clock Time",
            &format!("{:.6} s", metrics.total_time_sec),
            "🕐",
        ));
        output.push_str(&info(
            "CPU Efficiency",
            &format!("{:.1}%", metrics.cpu_efficiency_pct),
            "🎯",
        ));

        output.push_str(&section("PERFORMANCE METRICS", "📈"));
        output.push_str(&info(
            "Cycles per Second",
            &format_rate(metrics.cycles_per_second),
            "🔁",
        ));
        output.push_str(&info(
            "Time per Cycle",
            &format_duration_ns(metrics.seconds_per_cycle * 1e9),
            "⏳",
        ));
        if let Some((fastest, slowest)) = report.checkpoint_range() {
            output.push_str(&info(
                "Checkpoint Spread",
                &format!(
                    "{} - {}",
                    format_duration_ns(fastest * 1e9),
                    format_duration_ns(slowest * 1e9)
                ),
                "📉",
            ));
        }
        output.push_str(&info(
            "Performance Rating",
            &metrics.rating_tier.to_string(),
            "🏆",
        ));

        output.push_str(&section("SYSTEM INFORMATION", "💻"));
        output.push_str(&info("Cyclebench Version", env!("CARGO_PKG_VERSION"), "🦀"));
        output.push_str(&info("Platform", &platform(), "🖥️"));
        output.push_str(&info(
            "Completion Time",
            &report.completed_at.format(TIMESTAMP_FORMAT).to_string(),
            "✅",
        ));

        output.push_str(&section("PERFORMANCE PREDICTIONS", "🔮"));
        output.push_str(&self.format_predictions(&report.predictions));

        output.push_str(&self.header("EXECUTION COMPLETE", "🎉"));
        output.push_str(&format!(
            "✅ Successfully completed {} cycles\n",
            format_count(report.outcome.cycles)
        ));
        output.push_str(&format!(
            "⚡ Performance: {} cycles/second\n",
            format_rate(metrics.cycles_per_second)
        ));
        output.push_str(&format!("🏆 Rating: {}\n", metrics.rating_tier));
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("An error occurred: {}", error)
    }

    fn format_large_run_warning(&self, cycles: u64) -> String {
        let mut output = section("WARNING", "⚠️");
        output.push_str(&large_run_notice(cycles));
        output
    }
}

/// Plain text formatter without banners or symbols.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_intro(&self, cycles: u64, started_at: DateTime<Local>) -> String {
        format!(
            "Executing {} cycles\nStart Time: {}\n",
            cycles,
            started_at.format(TIMESTAMP_FORMAT)
        )
    }

    fn format_report(&self, report: &Report) -> String {
        let metrics = &report.metrics;
        let mut output = String::new();

        output.push_str(&format!(
            "Total Execution Time: {}\n",
            format_duration_ns(report.outcome.wall_time_ns())
        ));
        output.push_str(&format!("CPU Processing Time: {:.6} s\n", metrics.cpu_time_sec));
        output.push_str(&format!("Wall Clock Time: {:.6} s\n", metrics.total_time_sec));
        output.push_str(&format!("CPU Efficiency: {:.1}%\n", metrics.cpu_efficiency_pct));
        output.push_str(&format!(
            "Cycles per Second: {:.0}\n",
            metrics.cycles_per_second
        ));
        output.push_str(&format!(
            "Time per Cycle: {}\n",
            format_duration_ns(metrics.seconds_per_cycle * 1e9)
        ));
        output.push_str(&format!(
            "Performance Rating: {}\n",
            metrics.rating_tier.label()
        ));
        output.push_str(&format!(
            "Completion Time: {}\n",
            report.completed_at.format(TIMESTAMP_FORMAT)
        ));

        for prediction in &report.predictions {
            output.push_str(&format!(
                "Prediction {} cycles: {}\n",
                prediction.cycles,
                prediction.formatted_time()
            ));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// JSON formatter for machine consumption.
///
/// Prompts and the progress line go to stderr so stdout carries only the
/// report document.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_intro(&self, _cycles: u64, _started_at: DateTime<Local>) -> String {
        String::new()
    }

    fn format_report(&self, report: &Report) -> String {
        let output = json!({
            "cycles": report.outcome.cycles,
            "started_at": report.started_at.to_rfc3339(),
            "completed_at": report.completed_at.to_rfc3339(),
            "wall_time_ns": report.outcome.wall_time.as_nanos() as u64,
            "cpu_time_ns": report.outcome.cpu_time.as_nanos() as u64,
            "checkpoints": report.outcome.checkpoints,
            "metrics": report.metrics,
            "predictions": report.predictions,
            "platform": platform(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize report" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }

    fn interactive_on_stderr(&self) -> bool {
        true
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The output format
/// * `width` - Banner width for the table format
///
/// # Returns
/// A boxed formatter implementing the OutputFormatter trait
pub fn create_formatter(format: OutputFormat, width: usize) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(width)),
    }
}
