//! Flatten a document into a report row

use crate::error::ExtractorError;
use porous_domain::{MaterialDocument, MaterialProperty, Row, ThermoProperty};

/// Build the row for one document
///
/// All four material properties are required. Thermo entries are read only
/// when their `component` equals `component`; for those, an unrecognized
/// `type` is an error. A later entry of the same type replaces an earlier one.
pub fn build_row(document: &MaterialDocument, component: &str) -> Result<Row, ExtractorError> {
    let porous = document
        .porous
        .as_ref()
        .ok_or_else(|| ExtractorError::missing("porous"))?;
    let mut row = Row::new();

    let properties = porous
        .material_properties
        .as_ref()
        .ok_or_else(|| ExtractorError::missing("porous.material_properties"))?;

    for property in MaterialProperty::ALL {
        let key = property.source_key();
        let path = || format!("porous.material_properties.{}", key);

        let value = properties
            .get(key)
            .filter(|value| !value.is_absent())
            .ok_or_else(|| ExtractorError::missing(path()))?
            .as_f64()
            .ok_or_else(|| ExtractorError::NotNumeric { path: path() })?;
        row.insert(property.column_name(), value);
    }

    let thermo = porous
        .thermo_parameters
        .as_ref()
        .ok_or_else(|| ExtractorError::missing("porous.thermo_parameters"))?;

    for (index, entry) in thermo.iter().enumerate() {
        let path = |field: &str| format!("porous.thermo_parameters[{}].{}", index, field);

        let entry_component = entry
            .component
            .as_deref()
            .ok_or_else(|| ExtractorError::missing(path("component")))?;
        if entry_component != component {
            continue;
        }

        let kind = entry
            .kind
            .as_deref()
            .ok_or_else(|| ExtractorError::missing(path("type")))?;
        let property = ThermoProperty::from_source_key(kind)
            .ok_or_else(|| ExtractorError::UnknownThermoType(kind.to_string()))?;

        if entry.values.is_absent() {
            return Err(ExtractorError::missing(path("values")));
        }
        let value = entry
            .values
            .as_f64()
            .ok_or_else(|| ExtractorError::NotNumeric {
                path: path("values"),
            })?;
        row.insert(property.column_name(), value);
    }

    Ok(row)
}
