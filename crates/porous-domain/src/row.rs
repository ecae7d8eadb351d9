//! Row - the flattened values of one document

use std::collections::BTreeMap;

/// Column name to value, iterated in ascending column order.
///
/// Ordering is byte-wise, so `Df` sorts before `density`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: BTreeMap<&'static str, f64>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column, replacing any earlier value
    pub fn insert(&mut self, column: &'static str, value: f64) {
        self.values.insert(column, value);
    }

    /// Value of a column
    pub fn get(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied()
    }

    /// Column names in order
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    /// Values in column order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.values().copied()
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no columns
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether this row has exactly the given columns, in order
    pub fn has_columns(&self, columns: &[&str]) -> bool {
        self.len() == columns.len() && self.columns().zip(columns).all(|(a, b)| a == *b)
    }
}
