//! Error types for lifegrid_core.
//!
//! The engine itself is infallible; these cover loading configuration for the
//! hosts that drive it.

use thiserror::Error;

/// Errors raised while reading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File system errors
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for lifegrid_core operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Creates a new validation error.
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }
}
