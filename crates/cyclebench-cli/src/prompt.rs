// Rust guideline compliant 2026-10-15

//! Interactive input: the cycle count prompt and large-run confirmation.
//!
//! Both prompts read from any `BufRead` and write to any `Write`, so the CLI
//! can drive them from the terminal and tests from byte buffers.

use cyclebench_core::{Error, Result};
use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error as ThisError;
use tracing::debug;

/// Reasons a typed cycle count is rejected.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum InputError {
    /// Nothing was entered.
    #[error("Please enter a value. Try again.")]
    Empty,
    /// The text is not an integer.
    #[error("Please enter a valid integer. Try again.")]
    NotInteger,
    /// The integer is zero or negative.
    #[error("Number of cycles must be positive. Try again.")]
    NonPositive,
}

/// Parses a cycle count, ignoring `,` and space separators.
///
/// # Arguments
///
/// * `text` - Raw user input
///
/// # Returns
///
/// The positive cycle count.
///
/// # Errors
///
/// Returns an [`InputError`] describing why the input was rejected.
pub fn parse_cycle_count(text: &str) -> std::result::Result<u64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let digits: String = trimmed.chars().filter(|c| *c != ',' && *c != ' ').collect();
    let value: i128 = digits.parse().map_err(|_| InputError::NotInteger)?;
    if value <= 0 {
        return Err(InputError::NonPositive);
    }
    u64::try_from(value).map_err(|_| InputError::NotInteger)
}

/// Returns true for "y" or "yes" in any case.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

fn check_interrupt(interrupted: &AtomicBool) -> Result<()> {
    if interrupted.load(Ordering::SeqCst) {
        return Err(Error::Interrupted);
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R, interrupted: &AtomicBool) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    check_interrupt(interrupted)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Prompts until a valid cycle count is entered.
///
/// # Errors
///
/// Returns `Error::Interrupted` if `interrupted` is raised, `Error::Cancelled`
/// if input ends before a valid count is read, or an IO error if reading or
/// writing fails.
pub fn prompt_cycle_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    interrupted: &AtomicBool,
) -> Result<u64> {
    loop {
        check_interrupt(interrupted)?;
        write!(output, "🎯 Enter number of cycles to execute: ")?;
        output.flush()?;

        let Some(line) = read_line(input, interrupted)? else {
            writeln!(output)?;
            return Err(Error::Cancelled);
        };

        match parse_cycle_count(&line) {
            Ok(cycles) => return Ok(cycles),
            Err(err) => {
                debug!(input = line.trim(), %err, "rejected cycle count");
                writeln!(output, "❌ {}\n", err)?;
            }
        }
    }
}

/// Asks a yes/no question defaulting to no.
///
/// # Errors
///
/// Returns `Error::Interrupted` if `interrupted` is raised, or an IO error if
/// reading or writing fails. End of input counts as "no".
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    interrupted: &AtomicBool,
) -> Result<bool> {
    check_interrupt(interrupted)?;
    write!(output, "{} (y/N): ", question)?;
    output.flush()?;
    Ok(read_line(input, interrupted)?.is_some_and(|answer| is_affirmative(&answer)))
}
