//! Error types for squirrel-engine.
//!
//! The math core itself never fails at runtime: degenerate input propagates
//! as NaN/inf. Only the configuration surface returns errors.

use thiserror::Error;

/// The main error type for squirrel-engine operations.
#[derive(Error, Debug)]
pub enum SquirrelError {
    /// An option value failed validation.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for squirrel-engine operations.
pub type Result<T> = std::result::Result<T, SquirrelError>;
