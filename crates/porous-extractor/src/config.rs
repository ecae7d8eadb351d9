//! Configuration for the Extractor

use crate::error::ExtractorError;
use porous_domain::CO2_COMPONENT;
use serde::{Deserialize, Serialize};

/// `f64` carries at most 17 significant decimal digits
const MAX_PRECISION: usize = 17;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Thermo entries are reported only for this component
    pub component: String,

    /// Literal written in every row's `type` column
    pub material_type: String,

    /// Digits after the decimal point for every value
    pub precision: usize,

    /// Fail when a row's columns differ from the header instead of writing
    /// it in its own column order
    pub strict_columns: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.component.is_empty() {
            return Err(ExtractorError::Config("component must not be empty".to_string()));
        }
        if self.material_type.is_empty() {
            return Err(ExtractorError::Config("material_type must not be empty".to_string()));
        }
        if self.material_type.contains([',', '\n', '\r']) {
            return Err(ExtractorError::Config(format!(
                "material_type {:?} contains a separator",
                self.material_type
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(ExtractorError::Config(format!(
                "precision {} exceeds {}",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            component: CO2_COMPONENT.to_string(),
            material_type: "zeolite".to_string(),
            precision: 6,
            strict_columns: false,
        }
    }
}
