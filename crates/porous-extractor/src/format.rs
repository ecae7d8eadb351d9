//! CSV line formatting
//!
//! Lines are returned without the trailing newline. Fields are written
//! verbatim; identifiers are not quoted.

use porous_domain::Row;

/// Header line: `id,type,<columns>`
pub fn format_header(columns: &[&str]) -> String {
    format!("id,type,{}", columns.join(","))
}

/// Data line: `<id>,<material_type>,<values in column order>`
pub fn format_row(id: &str, material_type: &str, row: &Row, precision: usize) -> String {
    let values: Vec<String> = row.values().map(|v| format_value(v, precision)).collect();
    format!("{},{},{}", id, material_type, values.join(","))
}

/// Fixed-point rendering with `precision` fractional digits
///
/// Non-finite values render as `nan`, `inf` and `-inf`.
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:.*}", precision, value)
    }
}
