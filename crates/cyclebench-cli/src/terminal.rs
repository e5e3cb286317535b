// Rust guideline compliant 2026-10-15

//! Terminal UI utilities for the cyclebench CLI.
//!
//! This module provides color support, terminal width detection and
//! colored status messages on stderr.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Width of section rules and banners on a wide terminal.
pub const MAX_RULE_WIDTH: usize = 80;

const MIN_RULE_WIDTH: usize = 40;

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns.
///
/// # Returns
/// The terminal width, or 80 if it cannot be determined
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Width to use for banner rules, bounded to 40..=80 columns.
pub fn rule_width() -> usize {
    get_terminal_width().clamp(MIN_RULE_WIDTH, MAX_RULE_WIDTH)
}

fn stderr_stream(use_color: bool) -> StandardStream {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stderr(choice)
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
/// * `use_color` - Whether to emit color codes
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let mut stderr = stderr_stream(use_color);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{} ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints a success message.
pub fn print_success(message: &str, use_color: bool) {
    print_status("✅", Color::Green, message, use_color);
}

/// Prints an error message.
pub fn print_error(message: &str, use_color: bool) {
    print_status("❌", Color::Red, message, use_color);
}

/// Prints a warning message.
pub fn print_warning(message: &str, use_color: bool) {
    print_status("⏹️ ", Color::Yellow, message, use_color);
}

/// Prints an info message.
pub fn print_info(message: &str, use_color: bool) {
    print_status("ℹ", Color::Cyan, message, use_color);
}
