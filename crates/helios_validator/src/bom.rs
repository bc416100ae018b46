//! Bill-of-materials checks.
//!
//! - Percentages: every unit's BOM fractions sum to 100% within tolerance
//! - References: every BOM row points at an existing material and unit

use helios_core::{Dataset, ForeignKey, IntegrityViolation, Unit, ValidationContext};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Slack for float noise left after rounding a sum to two decimals.
const PCT_EPSILON: f64 = 1e-9;

/// Validates the `unit_materials` table.
pub struct BomValidator;

impl BomValidator {
    /// Creates a new BOM validator.
    pub fn new() -> Self {
        Self
    }

    /// Flags units whose BOM fractions deviate from 100%.
    ///
    /// Rows of units that do not exist are skipped here; the reference check
    /// reports them. A row without a fraction counts as 0%. The sum is
    /// rounded to two decimals before it is compared and reported. A sum that
    /// is not a finite number always fails.
    pub fn check_percentages(
        &self,
        dataset: &Dataset,
        context: &ValidationContext,
    ) -> Vec<IntegrityViolation> {
        let units: HashMap<&str, &Unit> =
            dataset.units.iter().map(|u| (u.id.as_str(), u)).collect();

        // Sums keyed by unit, in order of first appearance
        let mut order: Vec<&Unit> = Vec::new();
        let mut totals: HashMap<&str, f64> = HashMap::new();

        for row in &dataset.unit_materials {
            let Some(&unit) = units.get(row.unit_id.as_str()) else {
                continue;
            };
            let total = totals.entry(unit.id.as_str()).or_insert_with(|| {
                order.push(unit);
                0.0
            });
            *total += row.fraction();
        }

        let mut errors = Vec::new();
        for unit in order {
            let total = round_pct(totals.get(unit.id.as_str()).copied().unwrap_or_default());
            if !within_tolerance(total, context.bom_tolerance_pct) {
                debug!("BOM of {} sums to {}", unit.id, total);
                errors.push(IntegrityViolation::PercentageSum {
                    unit_id: unit.id.clone(),
                    unit_name: unit.name.clone(),
                    total_pct: total,
                });
            }
        }

        errors
    }

    /// Reports BOM rows pointing at nonexistent materials or units.
    ///
    /// Each missing identifier is reported once; materials come first.
    pub fn check_references(&self, dataset: &Dataset) -> Vec<IntegrityViolation> {
        let materials: HashSet<&str> = dataset.materials.iter().map(|m| m.id.as_str()).collect();
        let units: HashSet<&str> = dataset.units.iter().map(|u| u.id.as_str()).collect();

        let mut errors = missing_ids(
            dataset.unit_materials.iter().map(|um| um.material_id.as_str()),
            &materials,
            ForeignKey::MaterialId,
        );
        errors.extend(missing_ids(
            dataset.unit_materials.iter().map(|um| um.unit_id.as_str()),
            &units,
            ForeignKey::UnitId,
        ));

        errors
    }
}

impl Default for BomValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns one violation per distinct id absent from `existing`, in order of
/// first appearance.
pub(crate) fn missing_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    existing: &HashSet<&str>,
    column: ForeignKey,
) -> Vec<IntegrityViolation> {
    let mut reported = HashSet::new();
    ids.filter(|id| !existing.contains(id) && reported.insert(*id))
        .map(|id| IntegrityViolation::missing(column, id))
        .collect()
}

fn round_pct(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn within_tolerance(total: f64, tolerance_pct: f64) -> bool {
    total.is_finite() && (100.0 - total).abs() <= tolerance_pct + PCT_EPSILON
}
