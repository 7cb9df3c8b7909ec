//! Error types for readscope-core.
//!
//! Scoring itself is total and never fails. Errors only arise at the edges:
//! loading configuration and guarding input size.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised before text reaches the scoring engine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The input exceeds the configured size limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// Size of the rejected input in bytes.
        size: usize,
        /// The configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;
