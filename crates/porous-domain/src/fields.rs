//! Field maps - fixed renames from stored keys to report column names

/// Thermo entries are reported only for this component by default
pub const CO2_COMPONENT: &str = "CO2";

/// Material property read from `porous.material_properties`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialProperty {
    /// Helium-probe accessible surface area
    SurfaceArea,
    /// Framework density
    Density,
    /// Largest included sphere diameter
    Di,
    /// Largest free sphere diameter
    Df,
}

impl MaterialProperty {
    /// Every property, each of which is required in every document
    pub const ALL: [MaterialProperty; 4] = [
        MaterialProperty::SurfaceArea,
        MaterialProperty::Density,
        MaterialProperty::Di,
        MaterialProperty::Df,
    ];

    /// Key under `porous.material_properties`
    pub fn source_key(&self) -> &'static str {
        match self {
            MaterialProperty::SurfaceArea => "surface_area_He",
            MaterialProperty::Density => "density",
            MaterialProperty::Di => "di",
            MaterialProperty::Df => "df",
        }
    }

    /// Report column name
    pub fn column_name(&self) -> &'static str {
        match self {
            MaterialProperty::SurfaceArea => "surface area",
            MaterialProperty::Density => "density",
            MaterialProperty::Di => "Di",
            MaterialProperty::Df => "Df",
        }
    }
}

/// Thermodynamic parameter type read from `porous.thermo_parameters`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThermoProperty {
    /// Isosteric heat of adsorption
    HeatOfAdsorption,
    /// Henry's law coefficient
    HenryCoefficient,
}

impl ThermoProperty {
    /// Every recognized thermo type
    pub const ALL: [ThermoProperty; 2] = [
        ThermoProperty::HeatOfAdsorption,
        ThermoProperty::HenryCoefficient,
    ];

    /// Value of the entry's `type` field
    pub fn source_key(&self) -> &'static str {
        match self {
            ThermoProperty::HeatOfAdsorption => "heat_of_adsorption",
            ThermoProperty::HenryCoefficient => "henry_coefficient",
        }
    }

    /// Report column name
    pub fn column_name(&self) -> &'static str {
        match self {
            ThermoProperty::HeatOfAdsorption => "Heat of adsorption",
            ThermoProperty::HenryCoefficient => "Henry coefficient",
        }
    }

    /// Look up a thermo type by its stored key (exact match)
    pub fn from_source_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.source_key() == key)
    }
}
