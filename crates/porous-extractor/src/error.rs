//! Error types for the Extractor

use thiserror::Error;

/// Errors that abort a report run
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A required field is absent from a document
    #[error("Missing field: {path}")]
    MissingField {
        /// Dotted path of the field
        path: String,
    },

    /// A field that must hold a number holds something else
    #[error("Field is not numeric: {path}")]
    NotNumeric {
        /// Dotted path of the field
        path: String,
    },

    /// A selected thermo entry has a type outside the thermo map
    #[error("Unknown thermo parameter type: {0}")]
    UnknownThermoType(String),

    /// A row's columns differ from the header (strict mode only)
    #[error("Column mismatch for {id}: expected [{expected}], found [{found}]")]
    ColumnMismatch {
        /// Row identifier
        id: String,
        /// Header columns, comma separated
        expected: String,
        /// Row columns, comma separated
        found: String,
    },

    /// Document source error
    #[error("Source error: {0}")]
    Source(String),

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        ExtractorError::MissingField { path: path.into() }
    }
}
