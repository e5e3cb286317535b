// Rust guideline compliant 2026-10-15

//! Implementation of the default benchmark command.
//!
//! Resolves the cycle count (argument or prompt, plus confirmation for large
//! runs), executes the workload with a live progress line and prints the
//! report.

use crate::interrupt::InterruptWatcher;
use crate::output::{OutputFormatter, Report};
use crate::prompt::{confirm, prompt_cycle_count};
use chrono::Local;
use cyclebench_core::{run_cycles, Config, Error, ProgressReporter, Result};
use std::io::{self, BufRead, Write};
use std::sync::atomic::AtomicBool;
use tracing::info;

/// Inputs for a benchmark run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Cycle count from the command line; prompted for when absent.
    pub cycles: Option<u64>,
    /// Skip the large-run confirmation.
    pub assume_yes: bool,
    /// Effective configuration.
    pub config: Config,
    /// Color the interrupt message printed while a prompt is waiting.
    pub use_color: bool,
}

/// Executes the benchmark against the process's stdin, stdout and stderr.
///
/// # Arguments
///
/// * `options` - Run inputs
/// * `formatter` - Output formatter for the selected format
///
/// # Returns
///
/// The report of the completed run.
///
/// # Errors
///
/// Returns an error if:
/// - Input ends before a cycle count is read, or the user declines (`Cancelled`)
/// - The user presses Ctrl-C (`Interrupted`)
/// - The interrupt watcher cannot be installed
/// - Terminal IO or CPU time measurement fails
pub fn execute(options: &RunOptions, formatter: &dyn OutputFormatter) -> Result<Report> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut interactive: Box<dyn Write> = if formatter.interactive_on_stderr() {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    let watcher = InterruptWatcher::install(options.use_color)?;

    if options.cycles.is_none() {
        write!(interactive, "{}", formatter.format_welcome())?;
    }
    let cycles = watcher.while_awaiting_input(|| {
        resolve_cycles(
            options,
            formatter,
            &mut input,
            &mut interactive,
            watcher.flag(),
        )
    })?;

    run_benchmark(
        cycles,
        &options.config,
        formatter,
        &mut out,
        &mut interactive,
        watcher.flag(),
    )
}

/// Determines the cycle count and confirms large runs.
///
/// # Errors
///
/// Returns `InvalidCycleCount` for a zero count, `Cancelled` when input ends
/// or the user declines, `Interrupted` once `interrupted` is raised, and IO
/// errors from the terminal.
pub fn resolve_cycles<R: BufRead, W: Write>(
    options: &RunOptions,
    formatter: &dyn OutputFormatter,
    input: &mut R,
    interactive: &mut W,
    interrupted: &AtomicBool,
) -> Result<u64> {
    let cycles = match options.cycles {
        Some(0) => {
            return Err(Error::InvalidCycleCount(
                "number of cycles must be positive".to_string(),
            ))
        }
        Some(cycles) => cycles,
        None => prompt_cycle_count(input, interactive, interrupted)?,
    };

    if cycles > options.config.confirm_threshold && !options.assume_yes {
        write!(interactive, "{}", formatter.format_large_run_warning(cycles))?;
        if !confirm(input, interactive, "Continue?", interrupted)? {
            info!(cycles, "large run declined");
            return Err(Error::Cancelled);
        }
    }

    Ok(cycles)
}

/// Runs `cycles` cycles and writes the intro and report to `out`.
///
/// The live progress line goes to `interactive`.
///
/// # Errors
///
/// Returns `Interrupted` if the flag is raised mid-run, or an IO error.
pub fn run_benchmark<O: Write, W: Write>(
    cycles: u64,
    config: &Config,
    formatter: &dyn OutputFormatter,
    out: &mut O,
    interactive: &mut W,
    interrupted: &AtomicBool,
) -> Result<Report> {
    let started_at = Local::now();
    write!(out, "{}", formatter.format_intro(cycles, started_at))?;
    out.flush()?;

    let mut reporter = ProgressReporter::new(&config.label, cycles, &mut *interactive)
        .with_bar_length(config.bar_length);
    let outcome = run_cycles(&mut reporter, interrupted)?;

    let report = Report::new(outcome, started_at, Local::now());
    writeln!(out, "{}", formatter.format_report(&report))?;
    out.flush()?;
    Ok(report)
}
