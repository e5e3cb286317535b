// Rust guideline compliant 2026-10-15

//! Error types for the cyclebench core library.

use thiserror::Error;

/// Result type alias for cyclebench operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cyclebench operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while writing output or reading input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file or override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Cycle count could not be accepted.
    #[error("Invalid cycle count: {0}")]
    InvalidCycleCount(String),

    /// The run was interrupted by the user.
    #[error("Run interrupted")]
    Interrupted,

    /// The user declined to start the run.
    #[error("Operation cancelled")]
    Cancelled,
}

impl Error {
    /// Returns true when the error represents a user-initiated stop rather than a failure.
    #[must_use]
    pub fn is_user_abort(&self) -> bool {
        matches!(self, Error::Interrupted | Error::Cancelled)
    }
}
