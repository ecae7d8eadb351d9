//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::format::{format_header, format_row};
use crate::row::build_row;
use porous_domain::{DocumentSource, Row};
use std::fmt::Display;
use std::io::Write;
use tracing::{debug, info, warn};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Data lines written, excluding the header
    pub rows_written: usize,

    /// Header columns after `id,type`; empty when no document was read
    pub columns: Vec<String>,
}

/// Writes the property report for every document of a source
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Write the header and one row per document to `sink`
    ///
    /// The first failure ends the run. Rows written before it stay in the
    /// sink, which is flushed whether or not the run succeeds.
    pub fn run<S, W>(
        &self,
        source: &mut S,
        sink: &mut W,
    ) -> Result<ExtractionSummary, ExtractorError>
    where
        S: DocumentSource + ?Sized,
        S::Error: Display,
        W: Write,
    {
        self.config.validate()?;

        info!(
            "Starting extraction for component '{}', type '{}'",
            self.config.component, self.config.material_type
        );

        let result = self.write_report(source, sink);
        let flushed = sink.flush();
        let summary = result?;
        flushed?;

        info!("Extraction complete: {} rows written", summary.rows_written);
        Ok(summary)
    }

    fn write_report<S, W>(
        &self,
        source: &mut S,
        sink: &mut W,
    ) -> Result<ExtractionSummary, ExtractorError>
    where
        S: DocumentSource + ?Sized,
        S::Error: Display,
        W: Write,
    {
        let documents = source
            .documents()
            .map_err(|e| ExtractorError::Source(e.to_string()))?;

        let mut header: Option<Vec<&'static str>> = None;
        let mut rows_written = 0;

        for document in documents {
            let document = document.map_err(|e| ExtractorError::Source(e.to_string()))?;
            let row = build_row(&document, &self.config.component)?;

            let first = header.is_none();
            if first {
                let columns: Vec<&'static str> = row.columns().collect();
                writeln!(sink, "{}", format_header(&columns))?;
                header = Some(columns);
            }

            let id = document
                .snlgroup_key()
                .ok_or_else(|| ExtractorError::missing("snl_final.snlgroup_key"))?;

            if let (false, Some(expected)) = (first, header.as_deref()) {
                if !row.has_columns(expected) {
                    self.column_drift(id, expected, &row)?;
                }
            }

            debug!("Row {}: {} columns", id, row.len());
            writeln!(
                sink,
                "{}",
                format_row(id, &self.config.material_type, &row, self.config.precision)
            )?;
            rows_written += 1;
        }

        Ok(ExtractionSummary {
            rows_written,
            columns: header
                .unwrap_or_default()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }

    fn column_drift(&self, id: &str, expected: &[&str], row: &Row) -> Result<(), ExtractorError> {
        let expected = expected.join(",");
        let found = row.columns().collect::<Vec<_>>().join(",");

        if self.config.strict_columns {
            return Err(ExtractorError::ColumnMismatch {
                id: id.to_string(),
                expected,
                found,
            });
        }

        warn!(
            "Row {} columns [{}] differ from header [{}]; written in its own order",
            id, found, expected
        );
        Ok(())
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}
