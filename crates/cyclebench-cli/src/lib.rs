// Rust guideline compliant 2026-10-15

//! Cyclebench CLI library.
//!
//! This library exposes the CLI modules for use in tests and by the
//! `cyclebench` binary.

pub mod commands;
pub mod interrupt;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter, Report};
pub use terminal::{get_terminal_width, rule_width, should_use_color};
