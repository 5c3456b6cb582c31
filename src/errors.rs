//! Centralized error handling for the colorcode crate.
//!
//! This module provides a unified error type that consolidates all
//! errors into a single enum, plus the narrower per-concern errors.

use thiserror::Error;

/// Unified error type for the colorcode crate.
#[derive(Error, Debug)]
pub enum ColorcodeError {
    /// Color lookup errors
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Color lookup specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The code is not a key of the color table
    #[error("Invalid color code: {0}")]
    InvalidColorCode(String),
}

/// Configuration specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Fallback is not a `#RGB` hex color
    #[error("Invalid fallback color: {0}")]
    InvalidFallback(String),
}

/// Type alias for Result using the unified error type
pub type Result<T> = std::result::Result<T, ColorcodeError>;
