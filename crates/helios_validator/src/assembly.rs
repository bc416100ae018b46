//! Assembly graph checks.
//!
//! This module validates the `unit_components` table: that edges start at
//! units flagged as assemblies, that both ends exist, and that no unit
//! contains itself directly or transitively.

use crate::bom::missing_ids;
use crate::ContainmentGraph;
use helios_core::{Dataset, ForeignKey, IntegrityViolation, Unit};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Validates the assembly containment relation.
pub struct AssemblyValidator;

impl AssemblyValidator {
    /// Creates a new assembly validator.
    pub fn new() -> Self {
        Self
    }

    /// Reports structural and referential problems in `unit_components`.
    ///
    /// In order: existing units used as assemblies without the assembly flag,
    /// assembly ids with no unit at all, then component ids with no unit.
    /// Each offending id is reported once.
    pub fn check_references(&self, dataset: &Dataset) -> Vec<IntegrityViolation> {
        let units: HashMap<&str, &Unit> =
            dataset.units.iter().map(|u| (u.id.as_str(), u)).collect();
        let unit_ids: HashSet<&str> = units.keys().copied().collect();

        let mut errors = Vec::new();

        let mut flagged = HashSet::new();
        for edge in &dataset.unit_components {
            if let Some(unit) = units.get(edge.assembly_id.as_str()) {
                if !unit.is_assembly && flagged.insert(unit.id.as_str()) {
                    errors.push(IntegrityViolation::NotAnAssembly {
                        assembly_id: unit.id.clone(),
                        unit_name: unit.name.clone(),
                    });
                }
            }
        }

        errors.extend(missing_ids(
            dataset.unit_components.iter().map(|uc| uc.assembly_id.as_str()),
            &unit_ids,
            ForeignKey::AssemblyId,
        ));
        errors.extend(missing_ids(
            dataset.unit_components.iter().map(|uc| uc.component_id.as_str()),
            &unit_ids,
            ForeignKey::ComponentId,
        ));

        errors
    }

    /// Reports the first containment cycle, if any.
    ///
    /// At most one violation is returned; further independent cycles are
    /// not searched for.
    pub fn check_cycles(&self, dataset: &Dataset) -> Vec<IntegrityViolation> {
        let graph = ContainmentGraph::from_components(&dataset.unit_components);
        debug!(
            "Containment graph: {} assemblies, {} edges",
            graph.assemblies().len(),
            graph.edge_count()
        );

        graph
            .find_first_cycle()
            .map(|path| IntegrityViolation::Cycle { path })
            .into_iter()
            .collect()
    }
}

impl Default for AssemblyValidator {
    fn default() -> Self {
        Self::new()
    }
}
