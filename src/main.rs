use clap::Parser;
use colorcode::{cli, errors::Result};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    if cli.list || !cli.codes.is_empty() {
        cli::run(cli)?;
    } else {
        tracing::error!("Please provide one or more color codes, or use --list.");
    }

    Ok(())
}
