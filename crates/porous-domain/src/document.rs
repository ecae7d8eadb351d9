//! Material document model
//!
//! Mirrors the nested layout of a stored material record. Every section is
//! optional at the type level: absence is reported by the extractor with the
//! full field path instead of failing at decode time.

use crate::value::PropertyValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Top-level fields requested from the collection
pub const PROJECTED_FIELDS: [&str; 3] = ["porous", "material_metadata", "snl_final"];

/// One material record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialDocument {
    /// Porosity analysis results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub porous: Option<PorousSection>,

    /// Descriptive metadata (formula, framework name, ...); not reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_metadata: Option<Value>,

    /// Final structure-group record carrying the report identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snl_final: Option<SnlFinal>,
}

/// The `porous` section of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PorousSection {
    /// Property name to value. Values are usually numeric but are not
    /// required to be for keys the report does not read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_properties: Option<BTreeMap<String, PropertyValue>>,

    /// Adsorption parameters, one entry per (component, type)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermo_parameters: Option<Vec<ThermoParameter>>,
}

/// One thermodynamic parameter entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThermoParameter {
    /// Adsorbate, e.g. `CO2`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    /// Parameter kind, e.g. `henry_coefficient`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Parameter value
    #[serde(default, skip_serializing_if = "PropertyValue::is_absent")]
    pub values: PropertyValue,
}

/// The `snl_final` section of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnlFinal {
    /// Structure-group key used as the report row id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snlgroup_key: Option<String>,
}

impl MaterialDocument {
    /// Report identifier, if present
    pub fn snlgroup_key(&self) -> Option<&str> {
        self.snl_final.as_ref()?.snlgroup_key.as_deref()
    }

    /// Material properties map, if present
    pub fn material_properties(&self) -> Option<&BTreeMap<String, PropertyValue>> {
        self.porous.as_ref()?.material_properties.as_ref()
    }

    /// Thermo parameter list, if present
    pub fn thermo_parameters(&self) -> Option<&[ThermoParameter]> {
        self.porous.as_ref()?.thermo_parameters.as_deref()
    }
}

impl ThermoParameter {
    /// Create an entry with a numeric value
    pub fn new(component: impl Into<String>, kind: impl Into<String>, value: f64) -> Self {
        Self {
            component: Some(component.into()),
            kind: Some(kind.into()),
            values: PropertyValue::Number(value),
        }
    }
}
