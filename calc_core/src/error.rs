//! Error types for the calc_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for calc_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Divisor was exactly zero. The only arithmetic failure.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
