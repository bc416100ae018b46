//! Immutable snapshot of the nomenclature dataset.
//!
//! A [`Dataset`] holds every table in declaration order. It is produced once
//! per validation run by a [`DatasetSource`] and only read afterwards.

use crate::{
    Category, DatasetError, Material, Planet, PlanetMaterial, Result, Unit, UnitComponent,
    UnitMaterial,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A read-only view of all dataset tables.
///
/// Tables missing from a serialized snapshot deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub planets: Vec<Planet>,

    #[serde(default)]
    pub materials: Vec<Material>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub units: Vec<Unit>,

    #[serde(default)]
    pub planet_materials: Vec<PlanetMaterial>,

    #[serde(default)]
    pub unit_materials: Vec<UnitMaterial>,

    #[serde(default)]
    pub unit_components: Vec<UnitComponent>,
}

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub planets: usize,
    pub materials: usize,
    pub categories: usize,
    pub units: usize,
    pub planet_materials: usize,
    pub unit_materials: usize,
    pub unit_components: usize,
}

impl TableCounts {
    /// Total number of rows across all tables.
    pub fn total(&self) -> usize {
        self.planets
            + self.materials
            + self.categories
            + self.units
            + self.planet_materials
            + self.unit_materials
            + self.unit_components
    }
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Looks up a planet by identifier.
    pub fn planet(&self, id: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    /// Looks up a material by identifier.
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Looks up a category by identifier.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Looks up a unit by identifier.
    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Returns the BOM rows of a unit in declaration order.
    pub fn bom_of<'a>(&'a self, unit_id: &'a str) -> impl Iterator<Item = &'a UnitMaterial> {
        self.unit_materials
            .iter()
            .filter(move |um| um.unit_id == unit_id)
    }

    /// Returns the component edges of an assembly in declaration order.
    pub fn components_of<'a>(
        &'a self,
        assembly_id: &'a str,
    ) -> impl Iterator<Item = &'a UnitComponent> {
        self.unit_components
            .iter()
            .filter(move |uc| uc.assembly_id == assembly_id)
    }

    /// Returns row counts for every table.
    pub fn counts(&self) -> TableCounts {
        TableCounts {
            planets: self.planets.len(),
            materials: self.materials.len(),
            categories: self.categories.len(),
            units: self.units.len(),
            planet_materials: self.planet_materials.len(),
            unit_materials: self.unit_materials.len(),
            unit_components: self.unit_components.len(),
        }
    }

    /// Returns true if no table holds any row.
    pub fn is_empty(&self) -> bool {
        self.counts().total() == 0
    }

    /// Verifies that identifiers are unique within each entity table.
    ///
    /// Link tables have no primary key of their own and are not checked.
    pub fn check_primary_keys(&self) -> Result<()> {
        first_duplicate("planets", self.planets.iter().map(|p| p.id.as_str()))?;
        first_duplicate("materials", self.materials.iter().map(|m| m.id.as_str()))?;
        first_duplicate("categories", self.categories.iter().map(|c| c.id.as_str()))?;
        first_duplicate("units", self.units.iter().map(|u| u.id.as_str()))?;
        Ok(())
    }
}

fn first_duplicate<'a>(table: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Anything a validation run can acquire a snapshot from.
///
/// Acquisition happens once per run; a failure aborts the run before any
/// check executes.
pub trait DatasetSource {
    /// Human-readable description of where the snapshot comes from.
    fn describe(&self) -> String;

    /// Loads the snapshot.
    fn load(&self) -> Result<Dataset>;
}

impl DatasetSource for Dataset {
    fn describe(&self) -> String {
        "in-memory dataset".to_string()
    }

    fn load(&self) -> Result<Dataset> {
        Ok(self.clone())
    }
}
