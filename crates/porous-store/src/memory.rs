//! In-memory document source

use crate::StoreError;
use porous_domain::{DocumentSource, Documents, MaterialDocument};

/// Serves documents from a vector, in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<MaterialDocument>,
}

impl MemorySource {
    /// Create a source over the given documents
    pub fn new(documents: Vec<MaterialDocument>) -> Self {
        Self { documents }
    }

    /// Number of documents held
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the source is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSource for MemorySource {
    type Error = StoreError;

    fn documents(&mut self) -> Result<Documents<'_, StoreError>, StoreError> {
        Ok(Box::new(self.documents.iter().cloned().map(Ok::<_, StoreError>)))
    }
}
