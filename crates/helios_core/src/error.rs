//! Error and violation types for the nomenclature dataset.
//!
//! [`DatasetError`] covers failures to acquire a snapshot at all.
//! [`IntegrityViolation`] describes a single problem found inside a snapshot
//! by one of the integrity checks; violations are data, not `Err` values.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors raised while acquiring a dataset snapshot.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The snapshot does not exist; the run aborts before any check
    #[error("Dataset snapshot not found: {0}")]
    SnapshotMissing(String),

    /// The snapshot exists but could not be read or decoded
    #[error("Failed to load dataset snapshot: {0}")]
    Load(String),

    /// Two rows of an entity table share an identifier
    #[error("Duplicate identifier '{id}' in table '{table}'")]
    DuplicateId {
        /// Table name
        table: &'static str,
        /// Repeated identifier
        id: String,
    },
}

impl DatasetError {
    /// Returns true for the "snapshot missing" condition.
    pub fn is_missing(&self) -> bool {
        matches!(self, DatasetError::SnapshotMissing(_))
    }
}

/// Whether a check's findings block publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Classification of integrity violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// BOM fractions of a unit do not sum to 100%
    PercentageSum,
    /// A relation row references a nonexistent entity
    ReferentialIntegrity,
    /// An assembly edge starts at a unit that is not an assembly
    Structural,
    /// The containment graph has a cycle
    Cycle,
    /// A material lacks sourcing or a unit lacks a BOM
    Coverage,
    /// A material is never used in any BOM (advisory)
    UnusedMaterial,
}

impl ViolationKind {
    /// Severity implied by this kind of violation.
    pub fn severity(self) -> Severity {
        match self {
            ViolationKind::UnusedMaterial => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Foreign-key column a referential violation was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForeignKey {
    MaterialId,
    UnitId,
    AssemblyId,
    ComponentId,
}

impl fmt::Display for ForeignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = match self {
            ForeignKey::MaterialId => "material_id",
            ForeignKey::UnitId => "unit_id",
            ForeignKey::AssemblyId => "assembly_id",
            ForeignKey::ComponentId => "component_id",
        };
        f.write_str(column)
    }
}

/// A single finding of an integrity check.
///
/// `Display` renders the diagnostic line shown under the check name.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityViolation {
    /// BOM fractions do not sum to 100% within tolerance
    #[error("{unit_id} ({unit_name}): {total_pct}% instead of 100%")]
    PercentageSum {
        unit_id: String,
        unit_name: String,
        /// Sum rounded to two decimals
        total_pct: f64,
    },

    /// A relation row references an entity that does not exist
    #[error("{column} '{id}' does not exist")]
    MissingReference { column: ForeignKey, id: String },

    /// A unit that is not flagged as an assembly has components
    #[error("{assembly_id} ({unit_name}) is not an assembly but has components")]
    NotAnAssembly {
        assembly_id: String,
        unit_name: String,
    },

    /// The containment graph has a cycle; the path repeats its first node last
    #[error("Cycle: {}", .path.join(" → "))]
    Cycle { path: Vec<String> },

    /// A non-root material is not sourced from any planet
    #[error("{material_id} ({material_name}) is not linked to any planet")]
    UnsourcedMaterial {
        material_id: String,
        material_name: String,
    },

    /// A locally produced simple unit has no BOM rows
    #[error("{unit_id} ({unit_name}) has no BOM")]
    MissingBom { unit_id: String, unit_name: String },

    /// A non-root material appears in no BOM
    #[error("{material_id} ({material_name}) is not used")]
    UnusedMaterial {
        material_id: String,
        material_name: String,
    },
}

impl IntegrityViolation {
    /// Returns the classification of this violation.
    pub fn kind(&self) -> ViolationKind {
        match self {
            IntegrityViolation::PercentageSum { .. } => ViolationKind::PercentageSum,
            IntegrityViolation::MissingReference { .. } => ViolationKind::ReferentialIntegrity,
            IntegrityViolation::NotAnAssembly { .. } => ViolationKind::Structural,
            IntegrityViolation::Cycle { .. } => ViolationKind::Cycle,
            IntegrityViolation::UnsourcedMaterial { .. } | IntegrityViolation::MissingBom { .. } => {
                ViolationKind::Coverage
            }
            IntegrityViolation::UnusedMaterial { .. } => ViolationKind::UnusedMaterial,
        }
    }

    /// Returns the severity of this violation.
    pub fn severity(&self) -> Severity {
        self.kind().severity()
    }

    /// Creates a missing-reference violation.
    pub fn missing(column: ForeignKey, id: impl Into<String>) -> Self {
        Self::MissingReference {
            column,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_violation_messages() {
        let sum = IntegrityViolation::PercentageSum {
            unit_id: "PRD-001".to_string(),
            unit_name: "Mirror".to_string(),
            total_pct: 95.0,
        };
        assert_eq!(sum.to_string(), "PRD-001 (Mirror): 95% instead of 100%");

        let missing = IntegrityViolation::missing(ForeignKey::MaterialId, "MAT-XX");
        assert_eq!(missing.to_string(), "material_id 'MAT-XX' does not exist");

        let cycle = IntegrityViolation::Cycle {
            path: vec!["A".into(), "B".into(), "C".into(), "A".into()],
        };
        assert_eq!(cycle.to_string(), "Cycle: A → B → C → A");
    }

    #[test]
    fn test_violation_kinds_and_severity() {
        let unused = IntegrityViolation::UnusedMaterial {
            material_id: "MAT-K".to_string(),
            material_name: "Potassium".to_string(),
        };
        assert_eq!(unused.kind(), ViolationKind::UnusedMaterial);
        assert_eq!(unused.severity(), Severity::Warning);

        let no_bom = IntegrityViolation::MissingBom {
            unit_id: "EQP-001".to_string(),
            unit_name: "Furnace".to_string(),
        };
        assert_eq!(no_bom.kind(), ViolationKind::Coverage);
        assert_eq!(no_bom.severity(), Severity::Error);

        let structural = IntegrityViolation::NotAnAssembly {
            assembly_id: "PRD-001".to_string(),
            unit_name: "Mirror".to_string(),
        };
        assert_eq!(structural.kind(), ViolationKind::Structural);
    }

    #[test]
    fn test_violation_serializes_with_kind_tag() {
        let violation = IntegrityViolation::missing(ForeignKey::ComponentId, "ROB-404");
        let json = serde_json::to_value(&violation).expect("serializable");
        assert_eq!(json["kind"], "missing_reference");
        assert_eq!(json["column"], "component_id");
        assert_eq!(json["id"], "ROB-404");
    }

    #[test]
    fn test_dataset_error_missing() {
        let err = DatasetError::SnapshotMissing("db/export".to_string());
        assert!(err.is_missing());
        assert_eq!(err.to_string(), "Dataset snapshot not found: db/export");
        assert!(!DatasetError::Load("bad json".to_string()).is_missing());
    }
}
