//! Error types for ctui.
//!
//! Defines the main error enum used throughout the crate.

use thiserror::Error;

/// Main error type for ctui operations.
#[derive(Error, Debug)]
pub enum CtuiError {
    /// Configuration errors (unreadable file, invalid TOML, bad CLI values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal or file I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Headless script errors (malformed steps, unreadable script).
    #[error("Script error: {0}")]
    Script(String),

    /// Failures raised by a command handler while it runs.
    #[error("Command error: {0}")]
    Command(String),

    /// Internal errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CtuiError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a script error with the given message.
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Creates a command error with the given message.
    pub fn command(msg: impl Into<String>) -> Self {
        Self::Command(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
            Self::Script(_) => "Script Error",
            Self::Command(_) => "Command Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using CtuiError.
pub type Result<T> = std::result::Result<T, CtuiError>;
