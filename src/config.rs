//! Configuration management for colorcode.
//!
//! Centralizes all configuration options and provides a clean interface
//! for accessing settings.

use crate::colors::{is_hex_color, return_color};
use crate::errors::{ColorError, ConfigError};

/// Environment variable holding the fallback color.
pub const FALLBACK_ENV: &str = "COLORCODE_FALLBACK";

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Lookup configuration
    pub lookup: LookupConfig,
}

/// Lookup configuration
#[derive(Debug, Clone, Default)]
pub struct LookupConfig {
    /// Hex color returned for unknown codes (optional)
    pub fallback: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Clone)]
pub struct CliOverrides {
    /// Fallback color override
    pub fallback: Option<String>,
}

impl Config {
    /// Load configuration with CLI overrides, reading the process environment.
    pub fn load(cli_overrides: Option<CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_with(cli_overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration with CLI overrides and a custom environment lookup.
    ///
    /// CLI overrides take precedence over the environment. Empty environment
    /// values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFallback`] if the resolved fallback is
    /// not a `#RGB` hex color.
    pub fn load_with<F>(cli_overrides: Option<CliOverrides>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(overrides) = cli_overrides {
            config.lookup.fallback = overrides.fallback;
        }

        if config.lookup.fallback.is_none() {
            config.lookup.fallback = env(FALLBACK_ENV).filter(|value| !value.is_empty());
        }

        if let Some(fallback) = config.lookup.fallback.as_mut() {
            if !is_hex_color(fallback) {
                return Err(ConfigError::InvalidFallback(fallback.clone()));
            }
            fallback.make_ascii_lowercase();
        }

        Ok(config)
    }

    /// Get the fallback color
    pub fn fallback(&self) -> Option<&str> {
        self.lookup.fallback.as_deref()
    }

    /// Resolve a color code, substituting the fallback for unknown codes.
    pub fn resolve<'a>(&'a self, code: &str) -> Result<&'a str, ColorError> {
        match return_color(code) {
            Ok(hex) => Ok(hex),
            Err(e) => match self.fallback() {
                Some(fallback) => {
                    tracing::debug!(code, fallback, "Using fallback color");
                    Ok(fallback)
                }
                None => Err(e),
            },
        }
    }
}

impl CliOverrides {
    /// Create CLI overrides from CLI arguments
    pub fn from_cli_args(fallback: Option<String>) -> Self {
        Self { fallback }
    }
}
