//! colorcode - resolve color names to hex color codes.
//!
//! A small lookup library over a fixed, compiled-in color table, with an
//! optional command-line front end.

pub mod colors;
pub mod config;
pub mod errors;

#[cfg(feature = "cli")]
pub mod cli;

pub use colors::{color_codes, count_colors, expect_color, get_color, is_hex_color, return_color};
pub use errors::{ColorError, ColorcodeError, ConfigError};
