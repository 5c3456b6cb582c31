//! Color code lookup.
//!
//! The table is generated at build time from `colors.json` into a static
//! perfect-hash map, so every lookup is a read of immutable data.

use crate::errors::ColorError;

include!(concat!(env!("OUT_DIR"), "/colors.rs"));

/// Resolves a color code (e.g. `"red"`) to its hex color string.
///
/// Matching is exact and case-sensitive.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorCode`] if `code` is not in the table.
pub fn return_color(code: &str) -> Result<&'static str, ColorError> {
    match COLORS.get(code) {
        Some(hex) => Ok(*hex),
        None => {
            tracing::debug!(code, "Unknown color code");
            Err(ColorError::InvalidColorCode(code.to_string()))
        }
    }
}

/// Resolves a color code, panicking if it is unknown.
///
/// Use this only where an unknown code is a programming error.
///
/// # Panics
///
/// Panics with the [`ColorError::InvalidColorCode`] message if `code` is not
/// in the table.
pub fn expect_color(code: &str) -> &'static str {
    match return_color(code) {
        Ok(hex) => hex,
        Err(e) => panic!("{}", e),
    }
}

pub fn get_color(code: &str) -> Option<&'static str> {
    COLORS.get(code).copied()
}

pub fn count_colors() -> usize {
    COLORS.len()
}

/// Every `(code, hex)` pair in the table, sorted by code.
pub fn color_codes() -> impl Iterator<Item = (&'static str, &'static str)> {
    let mut entries: Vec<_> = COLORS.entries().map(|(code, hex)| (*code, *hex)).collect();
    entries.sort_unstable_by_key(|(code, _)| *code);
    entries.into_iter()
}

/// Returns true if `value` is a `#RGB` hex color.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}
