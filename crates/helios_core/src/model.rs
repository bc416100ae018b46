//! Typed records of the nomenclature dataset.
//!
//! Each table of the dataset maps onto one struct. Field names follow the
//! JSON export so that a snapshot can be deserialized directly. Foreign keys
//! are kept as plain identifiers: nothing here enforces referential
//! integrity, that is the job of the integrity checks.

use serde::{Deserialize, Serialize};

/// A planet (or moon) that can source materials or produce units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Planet identifier (e.g., "mercury")
    pub id: String,

    /// Display name
    pub name: String,

    /// Surface gravity in m/s²
    #[serde(default)]
    pub gravity_m_s2: Option<f64>,

    /// Solar constant at the planet's orbit in W/m²
    #[serde(default)]
    pub solar_constant_w_m2: Option<f64>,

    /// Escape velocity in km/s
    #[serde(default)]
    pub escape_velocity_km_s: Option<f64>,

    /// Whether the planet has an atmosphere
    #[serde(default)]
    pub has_atmosphere: bool,

    /// Citations backing the physical attributes
    #[serde(default)]
    pub sources: Vec<String>,
}

/// How critical a material is to the production chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Critical,
    High,
    Medium,
    Low,
}

/// A material node in the material tree.
///
/// Root nodes (no parent) are categories such as "Metals" and are never
/// required to be sourced or used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material identifier (e.g., "MAT-AL")
    pub id: String,

    /// Parent material, `None` for category roots
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Display name
    pub name: String,

    /// Chemical symbol or formula
    #[serde(default)]
    pub symbol: Option<String>,

    /// Free-form description of the material's role
    #[serde(default)]
    pub description: Option<String>,

    /// Criticality tier
    #[serde(default)]
    pub criticality: Option<Criticality>,

    /// Citations
    #[serde(default)]
    pub sources: Vec<String>,
}

impl Material {
    /// Returns true if this material is a category root.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A flat classification for units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A production unit: a robot, a facility, a piece of equipment or a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit identifier (e.g., "ROB-001")
    pub id: String,

    /// Category reference
    pub category_id: String,

    /// Display name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Mass in kilograms
    #[serde(default)]
    pub mass_kg: Option<f64>,

    /// Power draw in kilowatts
    #[serde(default)]
    pub power_kw: Option<f64>,

    /// Physical container unit. Unrelated to the assembly relation.
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Whether this unit is built from other units
    #[serde(default)]
    pub is_assembly: bool,

    /// Planet where the unit is produced; the import planet means "shipped in".
    /// Unknown when absent, and then never treated as locally produced.
    #[serde(default)]
    pub production_planet_id: Option<String>,

    /// Citations
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Records that a material can be sourced on a planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetMaterial {
    pub planet_id: String,
    pub material_id: String,

    /// Concentration in the regolith/crust, in percent
    #[serde(default)]
    pub concentration_pct: Option<f64>,

    #[serde(default)]
    pub notes: Option<String>,
}

/// One bill-of-materials entry: the share of a unit's mass made of a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitMaterial {
    pub unit_id: String,
    pub material_id: String,

    /// Mass fraction in percent. Exports write a 0% row as null.
    #[serde(default)]
    pub fraction_pct: Option<f64>,
}

impl UnitMaterial {
    /// Fraction in percent, with a missing value counting as 0%.
    pub fn fraction(&self) -> f64 {
        self.fraction_pct.unwrap_or(0.0)
    }
}

/// An assembly → component edge of the containment graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitComponent {
    pub assembly_id: String,
    pub component_id: String,

    /// Number of component instances inside the assembly
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}
