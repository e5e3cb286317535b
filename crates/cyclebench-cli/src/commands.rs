// Rust guideline compliant 2026-10-15

//! Command implementations for the cyclebench CLI.

pub mod config;
pub mod run;
