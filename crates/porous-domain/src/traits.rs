//! Trait definitions for external interactions
//!
//! Storage backends implement [`DocumentSource`]; the extractor only sees
//! this trait.

use crate::MaterialDocument;

/// Forward-only stream of decoded documents
pub type Documents<'a, E> = Box<dyn Iterator<Item = Result<MaterialDocument, E>> + 'a>;

/// Trait for reading material documents
///
/// Implemented by the infrastructure layer (porous-store)
pub trait DocumentSource {
    /// Error type for source operations
    type Error;

    /// Open the query and return its documents in natural order.
    ///
    /// Failing to reach the backend is reported here, before any document
    /// is produced. Each yielded item may fail independently.
    fn documents(&mut self) -> Result<Documents<'_, Self::Error>, Self::Error>;
}
