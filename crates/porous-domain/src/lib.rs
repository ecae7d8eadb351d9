//! Porous Domain Layer
//!
//! Core model for the porous-materials property report. Defines the shape of
//! a material document as stored in the database, the fixed field maps that
//! rename stored keys to report columns, the flattened [`Row`], and the
//! [`DocumentSource`](traits::DocumentSource) trait that storage backends
//! implement.
//!
//! ## Key Concepts
//!
//! - **Document**: one semi-structured record describing a single material
//! - **Field maps**: static rename tables from stored keys to column names
//! - **Row**: the renamed numeric values of one document, ordered by column
//! - **PropertyValue**: a stored value that keeps NaN and infinities intact
//!
//! ## Architecture
//!
//! - No I/O and no database driver here
//! - Storage implementations live in `porous-store`
//! - Report generation lives in `porous-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod fields;
pub mod row;
pub mod traits;
pub mod value;

// Re-exports for convenience
pub use document::{
    MaterialDocument, PorousSection, SnlFinal, ThermoParameter, PROJECTED_FIELDS,
};
pub use fields::{MaterialProperty, ThermoProperty, CO2_COMPONENT};
pub use row::Row;
pub use traits::{DocumentSource, Documents};
pub use value::PropertyValue;
