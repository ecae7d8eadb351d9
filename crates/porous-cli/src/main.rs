//! porous-extract - write the porous-materials property report as CSV.

use clap::Parser;
use porous_cli::{logging, report, Cli, Config};
use tracing::info;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> porous_cli::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    let summary = report::execute(&cli, &config)?;
    info!(
        "Report complete: {} rows, columns [{}]",
        summary.rows_written,
        summary.columns.join(", ")
    );

    Ok(())
}
