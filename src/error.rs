//! Error types for the user builder crate.
//!
//! Input validation errors live in [`crate::domain::ValidationError`]; this
//! module holds the errors of the surrounding application.

use thiserror::Error;

pub use crate::domain::{ValidationError, ValidationResult};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
