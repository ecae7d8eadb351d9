//! The report command: open the source, open the output, run the extractor.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use porous_domain::DocumentSource;
use porous_extractor::{ExtractionSummary, Extractor};
use porous_store::{JsonLinesSource, MongoSource, StoreError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

/// Write the report described by `cli` and `config`.
///
/// The source is opened before the output, so an unreachable server leaves
/// the output file untouched.
pub fn execute(cli: &Cli, config: &Config) -> Result<ExtractionSummary> {
    let extractor = Extractor::new(config.extractor.clone());
    extractor.config().validate()?;

    let mut source: Box<dyn DocumentSource<Error = StoreError>> = match &cli.input {
        Some(path) => {
            info!("Reading documents from {}", path.display());
            Box::new(JsonLinesSource::open(path)?)
        }
        None => {
            let settings = &config.source;
            Box::new(MongoSource::connect(
                &settings.server,
                &settings.database,
                &settings.collection,
            )?)
        }
    };

    let output: Box<dyn Write> = match &cli.outfile {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = BufWriter::new(output);

    Ok(extractor.run(source.as_mut(), &mut sink)?)
}
