//! JSON-lines document source

use crate::StoreError;
use porous_domain::{DocumentSource, Documents, MaterialDocument};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads one JSON document per line
///
/// Blank lines are skipped. Decode errors carry the 1-based line number.
pub struct JsonLinesSource<R> {
    reader: R,
    label: String,
}

impl JsonLinesSource<BufReader<File>> {
    /// Open a JSON-lines file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
            label: path.display().to_string(),
        })
    }
}

impl<R: BufRead> JsonLinesSource<R> {
    /// Read documents from any buffered reader
    pub fn new(reader: R, label: impl Into<String>) -> Self {
        Self {
            reader,
            label: label.into(),
        }
    }
}

impl<R: BufRead> DocumentSource for JsonLinesSource<R> {
    type Error = StoreError;

    fn documents(&mut self) -> Result<Documents<'_, StoreError>, StoreError> {
        debug!("Reading documents from {}", self.label);
        let label = self.label.as_str();

        let documents = (&mut self.reader)
            .lines()
            .enumerate()
            .filter(|(_, line)| !matches!(line, Ok(text) if text.trim().is_empty()))
            .map(move |(index, line)| {
                let line = line?;
                serde_json::from_str::<MaterialDocument>(&line)
                    .map_err(|e| StoreError::Decode(format!("{}:{}: {}", label, index + 1, e)))
            });

        Ok(Box::new(documents))
    }
}
