//! Porous CLI library.
//!
//! Argument parsing, configuration loading, logging setup and the report
//! command behind the `porous-extract` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;

pub use cli::Cli;
pub use config::{Config, SourceSettings};
pub use error::{CliError, Result};
