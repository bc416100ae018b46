//! Validation traits and report types.
//!
//! This module defines the seam between a dataset snapshot and whatever
//! engine validates it, plus the report that engine hands back.

use crate::{Dataset, IntegrityViolation, Severity, TableCounts};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Default planet id meaning "imported, not produced locally".
pub const DEFAULT_IMPORT_PLANET: &str = "earth";

/// Default absolute tolerance for BOM sums, in percentage points.
pub const DEFAULT_BOM_TOLERANCE_PCT: f64 = 0.1;

/// Core trait for validating a dataset snapshot.
///
/// # Example
///
/// ```rust
/// use helios_core::{Dataset, DatasetValidator, ValidationContext, ValidationReport};
///
/// struct AlwaysValid;
///
/// impl DatasetValidator for AlwaysValid {
///     fn validate(&self, _dataset: &Dataset, _context: &ValidationContext) -> ValidationReport {
///         ValidationReport::new(Vec::new())
///     }
/// }
///
/// assert!(AlwaysValid.passes(&Dataset::empty(), &ValidationContext::new()));
/// ```
pub trait DatasetValidator {
    /// Runs all checks against the snapshot and returns the full report.
    fn validate(&self, dataset: &Dataset, context: &ValidationContext) -> ValidationReport;

    /// Returns only the verdict.
    fn passes(&self, dataset: &Dataset, context: &ValidationContext) -> bool {
        self.validate(dataset, context).passed
    }
}

/// Options for a validation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationContext {
    /// Echo passing checks in the text report
    pub verbose: bool,

    /// Production planet that marks a unit as imported
    pub import_planet_id: String,

    /// Allowed absolute deviation of a BOM sum from 100%
    pub bom_tolerance_pct: f64,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self {
            verbose: false,
            import_planet_id: DEFAULT_IMPORT_PLANET.to_string(),
            bom_tolerance_pct: DEFAULT_BOM_TOLERANCE_PCT,
        }
    }
}

impl ValidationContext {
    /// Creates a new validation context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets verbose reporting.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the import-marker planet.
    pub fn with_import_planet(mut self, planet_id: impl Into<String>) -> Self {
        self.import_planet_id = planet_id.into();
        self
    }

    /// Sets the BOM sum tolerance.
    pub fn with_bom_tolerance(mut self, tolerance_pct: f64) -> Self {
        self.bom_tolerance_pct = tolerance_pct;
        self
    }

    /// Returns true if a unit produced on `planet_id` counts as imported.
    pub fn is_import_planet(&self, planet_id: &str) -> bool {
        planet_id == self.import_planet_id
    }
}

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// Stable machine-readable identifier (e.g., "bom_percentages")
    pub id: &'static str,

    /// Human-readable check name
    pub name: &'static str,

    /// Whether findings block publication
    pub severity: Severity,

    /// Findings, in the order the check produced them
    pub violations: Vec<IntegrityViolation>,
}

impl CheckReport {
    /// Returns true if the check found nothing.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if this check makes the run fail.
    pub fn is_blocking_failure(&self) -> bool {
        self.severity == Severity::Error && !self.is_clean()
    }
}

/// Report of a validation run.
///
/// Checks are kept in the order they ran.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Whether every blocking check passed
    pub passed: bool,

    /// Per-check outcomes
    pub checks: Vec<CheckReport>,

    /// Run statistics
    pub stats: ValidationStats,
}

/// Statistics about a validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationStats {
    /// Row counts of the validated snapshot
    pub rows: TableCounts,

    /// Number of checks executed
    pub checks_run: usize,

    /// Number of blocking violations
    pub error_count: usize,

    /// Number of advisory violations
    pub warning_count: usize,

    /// When the run started
    pub started_at: Option<DateTime<Utc>>,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}

impl ValidationReport {
    /// Builds a report from check outcomes, deriving the verdict and counts.
    pub fn new(checks: Vec<CheckReport>) -> Self {
        let passed = !checks.iter().any(CheckReport::is_blocking_failure);
        let count = |severity: Severity| -> usize {
            checks
                .iter()
                .filter(|c| c.severity == severity)
                .map(|c| c.violations.len())
                .sum()
        };
        let stats = ValidationStats {
            checks_run: checks.len(),
            error_count: count(Severity::Error),
            warning_count: count(Severity::Warning),
            ..ValidationStats::default()
        };

        Self {
            passed,
            checks,
            stats,
        }
    }

    /// Returns the outcome of a check by id.
    pub fn check(&self, id: &str) -> Option<&CheckReport> {
        self.checks.iter().find(|c| c.id == id)
    }

    /// Iterates over blocking violations across all checks.
    pub fn errors(&self) -> impl Iterator<Item = &IntegrityViolation> {
        self.violations_with(Severity::Error)
    }

    /// Iterates over advisory violations across all checks.
    pub fn warnings(&self) -> impl Iterator<Item = &IntegrityViolation> {
        self.violations_with(Severity::Warning)
    }

    fn violations_with(&self, severity: Severity) -> impl Iterator<Item = &IntegrityViolation> {
        self.checks
            .iter()
            .filter(move |c| c.severity == severity)
            .flat_map(|c| c.violations.iter())
    }
}
