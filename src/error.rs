//! Error types for lexisent.
//!
//! The analysis engine itself is total and never fails. Errors only arise at
//! its boundary: validating caller input, loading lexicon or configuration
//! files, and reading batch input. All of them are represented by
//! [`LexisentError`].
//!
//! # Examples
//!
//! ```
//! use lexisent::error::{LexisentError, Result};
//!
//! fn check(text: &str) -> Result<()> {
//!     if text.trim().is_empty() {
//!         return Err(LexisentError::validation("text", "The text to analyze is required"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("   ").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexisent operations.
#[derive(Error, Debug)]
pub enum LexisentError {
    /// I/O errors (reading input, lexicon or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Caller input rejected before it reaches the engine
    #[error("Validation error on `{field}`: {message}")]
    Validation { field: String, message: String },

    /// Malformed lexicon tables
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexisentError.
pub type Result<T> = std::result::Result<T, LexisentError>;

impl LexisentError {
    /// Create a new validation error for `field`.
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        LexisentError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        LexisentError::Lexicon(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexisentError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexisentError::InvalidArgument(msg.into())
    }

    /// Whether this error was raised by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, LexisentError::Validation { .. })
    }
}
