//! Coverage checks.
//!
//! Every relevant entity must have at least one qualifying relation row:
//! non-root materials need a planet to be sourced from, locally produced
//! simple units need a BOM. Materials that no BOM uses are reported as
//! warnings only.

use helios_core::{Dataset, IntegrityViolation, Material, ValidationContext};
use std::collections::HashSet;

/// Validates sourcing and composition coverage.
pub struct CoverageValidator;

impl CoverageValidator {
    /// Creates a new coverage validator.
    pub fn new() -> Self {
        Self
    }

    /// Reports non-root materials absent from `planet_materials`.
    pub fn check_material_sourcing(&self, dataset: &Dataset) -> Vec<IntegrityViolation> {
        let sourced: HashSet<&str> = dataset
            .planet_materials
            .iter()
            .map(|pm| pm.material_id.as_str())
            .collect();

        uncovered_materials(dataset, &sourced)
            .map(|m| IntegrityViolation::UnsourcedMaterial {
                material_id: m.id.clone(),
                material_name: m.name.clone(),
            })
            .collect()
    }

    /// Reports simple, locally produced units absent from `unit_materials`.
    ///
    /// Assemblies get their composition from components and imported units
    /// are not broken down, so both are exempt. A unit without a production
    /// planet is not considered local.
    pub fn check_unit_bom(
        &self,
        dataset: &Dataset,
        context: &ValidationContext,
    ) -> Vec<IntegrityViolation> {
        let with_bom: HashSet<&str> = dataset
            .unit_materials
            .iter()
            .map(|um| um.unit_id.as_str())
            .collect();

        dataset
            .units
            .iter()
            .filter(|u| !u.is_assembly)
            .filter(|u| {
                u.production_planet_id
                    .as_deref()
                    .is_some_and(|planet| !context.is_import_planet(planet))
            })
            .filter(|u| !with_bom.contains(u.id.as_str()))
            .map(|u| IntegrityViolation::MissingBom {
                unit_id: u.id.clone(),
                unit_name: u.name.clone(),
            })
            .collect()
    }

    /// Reports non-root materials that no BOM row uses.
    pub fn check_unused_materials(&self, dataset: &Dataset) -> Vec<IntegrityViolation> {
        let used: HashSet<&str> = dataset
            .unit_materials
            .iter()
            .map(|um| um.material_id.as_str())
            .collect();

        uncovered_materials(dataset, &used)
            .map(|m| IntegrityViolation::UnusedMaterial {
                material_id: m.id.clone(),
                material_name: m.name.clone(),
            })
            .collect()
    }
}

impl Default for CoverageValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-root materials whose id is not in `covered`, in table order.
fn uncovered_materials<'a>(
    dataset: &'a Dataset,
    covered: &'a HashSet<&str>,
) -> impl Iterator<Item = &'a Material> {
    dataset
        .materials
        .iter()
        .filter(move |m| !m.is_root() && !covered.contains(m.id.as_str()))
}
