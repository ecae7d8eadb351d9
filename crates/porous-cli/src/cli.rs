//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Extract porous-material properties from MongoDB into a CSV report.
#[derive(Debug, Parser)]
#[command(name = "porous-extract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Collection [default: porous_materials]
    #[arg(short = 'c', long)]
    pub collection: Option<String>,

    /// Database [default: test]
    #[arg(short = 'd', long)]
    pub database: Option<String>,

    /// Output file [default: standard output]
    #[arg(short = 'o', long)]
    pub outfile: Option<PathBuf>,

    /// MongoDB server host or URI [default: localhost]
    #[arg(short = 's', long, env = "POROUS_MONGODB_SERVER")]
    pub server: Option<String>,

    /// Read documents from a JSON-lines file instead of MongoDB
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Configuration file path [default: ~/.porous/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
