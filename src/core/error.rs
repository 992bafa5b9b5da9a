//! Error handling and error types for dimension selection.
//!
//! Every precondition the selectors rely on is surfaced as an explicit
//! error instead of silently producing an invalid sample set.

use std::io;
use thiserror::Error;

/// Main error type for the dimselect library.
#[derive(Error, Debug)]
pub enum DimSelectError {
    /// Configuration and validation errors
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// The selector cannot produce a sample with its current configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Why the selector cannot sample
        message: String,
    },

    /// `next` was called before any `begin`
    #[error("Selector not started: call begin() before next()")]
    NotStarted,

    /// `next` was called after the sentinel was already returned
    #[error("Selector exhausted: {returned} dimensions and the sentinel were already returned")]
    Exhausted {
        /// Number of dimensions returned before the sentinel
        returned: usize,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Offending value, as text
        value: String,
        /// Constraint the value violates
        reason: String,
    },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        /// Underlying I/O error
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        /// Underlying `serde_json` error
        #[from]
        source: serde_json::Error,
    },

    /// TOML parsing errors
    #[error("TOML parse error: {source}")]
    TomlDe {
        /// Underlying TOML parse error
        #[from]
        source: toml::de::Error,
    },

    /// TOML serialization errors
    #[error("TOML serialization error: {source}")]
    TomlSer {
        /// Underlying TOML serialization error
        #[from]
        source: toml::ser::Error,
    },
}

/// Type alias for Results using DimSelectError
pub type Result<T> = std::result::Result<T, DimSelectError>;

impl DimSelectError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        DimSelectError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration<S: Into<String>>(message: S) -> Self {
        DimSelectError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an exhausted error after `returned` dimensions were handed out
    pub fn exhausted(returned: usize) -> Self {
        DimSelectError::Exhausted { returned }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        DimSelectError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable.
    ///
    /// Iteration protocol errors are recoverable by calling `begin` again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            DimSelectError::Config { .. } => false,
            DimSelectError::InvalidConfiguration { .. } => false,
            DimSelectError::NotStarted => true,
            DimSelectError::Exhausted { .. } => true,
            DimSelectError::InvalidParameter { .. } => false,
            DimSelectError::IO { .. } => false,
            DimSelectError::Json { .. } => false,
            DimSelectError::TomlDe { .. } => false,
            DimSelectError::TomlSer { .. } => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            DimSelectError::Config { .. } => "config",
            DimSelectError::InvalidConfiguration { .. } => "invalid_configuration",
            DimSelectError::NotStarted => "not_started",
            DimSelectError::Exhausted { .. } => "exhausted",
            DimSelectError::InvalidParameter { .. } => "invalid_parameter",
            DimSelectError::IO { .. } => "io",
            DimSelectError::Json { .. } => "json",
            DimSelectError::TomlDe { .. } => "toml",
            DimSelectError::TomlSer { .. } => "toml",
        }
    }
}

/// Convenience macro for configuration errors
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::core::error::DimSelectError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::DimSelectError::config(format!($fmt, $($arg)*))
    };
}

/// Return early with the given error when the condition does not hold
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
