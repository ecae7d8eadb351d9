//! Porous Storage Layer
//!
//! Implements the `DocumentSource` trait for the places material documents
//! are read from.
//!
//! # Sources
//!
//! - [`MongoSource`]: a MongoDB collection, queried with a fixed projection
//! - [`JsonLinesSource`]: one JSON document per line, as written by `mongoexport`
//! - [`MemorySource`]: documents held in a vector (useful for testing)
//!
//! # Examples
//!
//! ```no_run
//! use porous_store::MongoSource;
//!
//! let source = MongoSource::connect("localhost", "test", "porous_materials").unwrap();
//! // Source is now ready to stream documents
//! ```

#![warn(missing_docs)]

mod jsonl;
mod memory;
mod mongo;

use thiserror::Error;

pub use jsonl::JsonLinesSource;
pub use memory::MemorySource;
pub use mongo::{connection_uri, projection, MongoSource};

/// Errors that can occur while reading documents
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database unreachable or rejected the connection
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query failed on the server or mid-cursor
    #[error("Query error: {0}")]
    Query(String),

    /// A document could not be decoded into the material model
    #[error("Decode error: {0}")]
    Decode(String),

    /// File error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
