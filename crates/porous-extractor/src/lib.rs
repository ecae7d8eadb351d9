//! Porous Extractor
//!
//! Flattens material documents into a CSV property report.
//!
//! # Overview
//!
//! Each document contributes one row: four required material properties and
//! any recognized thermodynamic parameters for the selected adsorbate
//! (`CO2` by default), renamed to report column names and sorted by column.
//! The first document's columns become the header.
//!
//! # Architecture
//!
//! ```text
//! DocumentSource → build_row → format_row → sink
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use porous_extractor::{Extractor, ExtractorConfig};
//! use porous_store::MongoSource;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut source = MongoSource::connect("localhost", "test", "porous_materials")?;
//! let extractor = Extractor::new(ExtractorConfig::default());
//!
//! let stdout = std::io::stdout();
//! let summary = extractor.run(&mut source, &mut stdout.lock())?;
//! eprintln!("Wrote {} rows", summary.rows_written);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod format;
mod row;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{ExtractionSummary, Extractor};
pub use format::{format_header, format_row, format_value};
pub use row::build_row;
