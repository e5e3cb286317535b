// Rust guideline compliant 2026-10-15

//! Implementation of the `cyclebench config` commands.

use crate::terminal::print_success;
use anyhow::Result;
use cyclebench_core::Config;
use std::path::Path;

/// Writes a default configuration file.
///
/// # Arguments
///
/// * `path` - Destination file
/// * `force` - Overwrite an existing file
/// * `use_color` - Whether to color the confirmation message
///
/// # Errors
///
/// Returns an error if the file exists and `force` is not set, or if it
/// cannot be written.
pub fn init(path: &Path, force: bool, use_color: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    Config::default().save(path)?;
    print_success(
        &format!("Wrote default configuration to {}", path.display()),
        use_color,
    );
    Ok(())
}

/// Prints the effective configuration as TOML.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
