//! Command-line interface for colorcode.
//!
//! Handles CLI argument parsing and execution logic for resolving color codes.

use crate::errors::Result;
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::Level;

use crate::{
    colors,
    config::{CliOverrides, Config},
};

/// Command-line arguments for colorcode.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Color codes to resolve, e.g. `red green`.
    pub codes: Vec<String>,

    /// Print every known color code instead.
    #[arg(short, long)]
    pub list: bool,

    /// Hex color (`#RGB`) to print for unknown codes.
    #[arg(short, long, value_name = "HEX")]
    pub fallback: Option<String>,

    /// Write results to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Set the logging level.
    #[arg(long, short = 'L', value_name = "LEVEL", default_value_t = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO })]
    pub log_level: Level,
}

/// Builds the output lines, one `code hex` pair per line.
///
/// Fails on the first unknown code when no fallback is configured.
pub fn render_lines(cli: &Cli, config: &Config) -> Result<Vec<String>> {
    if cli.list {
        return Ok(colors::color_codes()
            .map(|(code, hex)| format!("{} {}", code, hex))
            .collect());
    }

    cli.codes
        .iter()
        .map(|code| -> Result<String> {
            let hex = config.resolve(code)?;
            Ok(format!("{} {}", code, hex))
        })
        .collect()
}

/// Executes the CLI command.
///
/// # Arguments
/// * `cli` - Parsed command-line arguments
///
/// # Returns
/// Result indicating success or failure of the lookup
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(Some(CliOverrides::from_cli_args(cli.fallback.clone())))?;

    let lines = render_lines(&cli, &config)?;

    match &cli.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_lines(&mut writer, &lines)?;
            writer.flush()?;
            tracing::info!("Wrote {} colors to {}.", lines.len(), path.to_string_lossy());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_lines(&mut writer, &lines)?;
        }
    }

    Ok(())
}

fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
