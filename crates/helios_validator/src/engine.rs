//! Main validation engine.
//!
//! This module provides the ordered list of integrity checks and the
//! `IntegrityValidator` that runs all of them against a snapshot and
//! aggregates the outcome into a report.

use crate::{AssemblyValidator, BomValidator, CoverageValidator, RunError, write_report};
use chrono::Utc;
use helios_core::{
    CheckReport, Dataset, DatasetSource, DatasetValidator, IntegrityViolation, Severity,
    ValidationContext, ValidationReport,
};
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// The integrity checks, in the order they run and are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// BOM fractions of each unit sum to 100%
    BomPercentages,
    /// BOM rows reference existing materials and units
    BomReferences,
    /// Assembly edges start at assemblies and reference existing units
    AssemblyReferences,
    /// The containment graph is acyclic
    AssemblyCycles,
    /// Non-root materials are sourced from some planet
    MaterialSourcing,
    /// Local simple units have a BOM
    UnitBomCoverage,
    /// Non-root materials are used by some BOM (advisory)
    UnusedMaterials,
}

impl Check {
    /// Every check in canonical order.
    pub const ALL: [Check; 7] = [
        Check::BomPercentages,
        Check::BomReferences,
        Check::AssemblyReferences,
        Check::AssemblyCycles,
        Check::MaterialSourcing,
        Check::UnitBomCoverage,
        Check::UnusedMaterials,
    ];

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Check::BomPercentages => "bom_percentages",
            Check::BomReferences => "bom_references",
            Check::AssemblyReferences => "assembly_references",
            Check::AssemblyCycles => "assembly_cycles",
            Check::MaterialSourcing => "material_sourcing",
            Check::UnitBomCoverage => "unit_bom_coverage",
            Check::UnusedMaterials => "unused_materials",
        }
    }

    /// Name shown in reports.
    pub fn name(self) -> &'static str {
        match self {
            Check::BomPercentages => "BOM: fractions sum to 100%",
            Check::BomReferences => "BOM: material/unit references",
            Check::AssemblyReferences => "Assemblies: component references",
            Check::AssemblyCycles => "Assemblies: circular containment",
            Check::MaterialSourcing => "Materials: planet sourcing",
            Check::UnitBomCoverage => "Units: BOM present",
            Check::UnusedMaterials => "Materials: unused",
        }
    }

    /// Whether findings block publication.
    pub fn severity(self) -> Severity {
        match self {
            Check::UnusedMaterials => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Main validation engine for nomenclature datasets.
///
/// Runs every [`Check`] against the same snapshot. Checks are independent:
/// a failing check never prevents the following ones from running.
///
/// # Example
///
/// ```rust
/// use helios_core::{DatasetBuilder, UnitBuilder};
/// use helios_validator::IntegrityValidator;
///
/// let dataset = DatasetBuilder::new()
///     .planet("mercury", "Mercury")
///     .root_material("MAT-METAL", "Metals")
///     .material("MAT-AL", "MAT-METAL", "Aluminium")
///     .sourced("mercury", "MAT-AL")
///     .unit(UnitBuilder::new("PRD-001", "products", "Foil").produced_on("mercury"))
///     .bom("PRD-001", "MAT-AL", 100.0)
///     .build();
///
/// let report = IntegrityValidator::new().run(&dataset);
/// assert!(report.passed);
/// ```
pub struct IntegrityValidator {
    context: ValidationContext,
    bom_validator: BomValidator,
    assembly_validator: AssemblyValidator,
    coverage_validator: CoverageValidator,
}

impl IntegrityValidator {
    /// Creates a validator with the default context.
    pub fn new() -> Self {
        Self::with_context(ValidationContext::new())
    }

    /// Creates a validator with the given context.
    pub fn with_context(context: ValidationContext) -> Self {
        Self {
            context,
            bom_validator: BomValidator::new(),
            assembly_validator: AssemblyValidator::new(),
            coverage_validator: CoverageValidator::new(),
        }
    }

    /// Returns the context used by [`IntegrityValidator::run`].
    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Runs all checks with the validator's own context.
    pub fn run(&self, dataset: &Dataset) -> ValidationReport {
        self.validate(dataset, &self.context)
    }

    /// Runs a single check.
    pub fn run_check(
        &self,
        check: Check,
        dataset: &Dataset,
        context: &ValidationContext,
    ) -> CheckReport {
        let violations = self.violations(check, dataset, context);
        debug!("{}: {} violation(s)", check.id(), violations.len());

        CheckReport {
            id: check.id(),
            name: check.name(),
            severity: check.severity(),
            violations,
        }
    }

    fn violations(
        &self,
        check: Check,
        dataset: &Dataset,
        context: &ValidationContext,
    ) -> Vec<IntegrityViolation> {
        match check {
            Check::BomPercentages => self.bom_validator.check_percentages(dataset, context),
            Check::BomReferences => self.bom_validator.check_references(dataset),
            Check::AssemblyReferences => self.assembly_validator.check_references(dataset),
            Check::AssemblyCycles => self.assembly_validator.check_cycles(dataset),
            Check::MaterialSourcing => self.coverage_validator.check_material_sourcing(dataset),
            Check::UnitBomCoverage => self.coverage_validator.check_unit_bom(dataset, context),
            Check::UnusedMaterials => self.coverage_validator.check_unused_materials(dataset),
        }
    }

    /// Acquires a snapshot, validates it and writes the text report to `out`.
    ///
    /// Returns the verdict. If the snapshot cannot be acquired, no check runs
    /// and the error is returned instead.
    pub fn validate_source<S, W>(&self, source: &S, out: &mut W) -> Result<bool, RunError>
    where
        S: DatasetSource + ?Sized,
        W: Write,
    {
        info!("Acquiring snapshot: {}", source.describe());
        let dataset = source.load()?;

        let report = self.run(&dataset);
        write_report(&report, self.context.verbose, out)?;
        Ok(report.passed)
    }
}

impl Default for IntegrityValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetValidator for IntegrityValidator {
    fn validate(&self, dataset: &Dataset, context: &ValidationContext) -> ValidationReport {
        let started_at = Utc::now();
        let start = Instant::now();

        let checks = Check::ALL
            .iter()
            .map(|&check| self.run_check(check, dataset, context))
            .collect();

        let mut report = ValidationReport::new(checks);
        report.stats.rows = dataset.counts();
        report.stats.started_at = Some(started_at);
        report.stats.duration_ms = start.elapsed().as_millis() as u64;

        if report.passed {
            info!(
                "Validation passed ({} warning(s))",
                report.stats.warning_count
            );
        } else {
            warn!(
                "Validation failed: {} error(s), {} warning(s)",
                report.stats.error_count, report.stats.warning_count
            );
        }

        report
    }
}

/// Validates a snapshot and prints the report to standard output.
///
/// Returns true when every blocking check passed. A snapshot that cannot be
/// acquired is reported as fatal on standard error and yields false.
pub fn validate<S: DatasetSource + ?Sized>(source: &S, verbose: bool) -> bool {
    let validator = IntegrityValidator::with_context(ValidationContext::new().with_verbose(verbose));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match validator.validate_source(source, &mut out) {
        Ok(passed) => passed,
        Err(err) => {
            error!("Validation aborted: {}", err);
            if let Err(write_err) = write_fatal(&err, &mut io::stderr().lock()) {
                warn!("Could not report fatal error: {}", write_err);
            }
            false
        }
    }
}

/// Writes the fatal line for a run that never reached a verdict.
fn write_fatal<W: Write>(err: &RunError, out: &mut W) -> io::Result<()> {
    writeln!(out, "❌ {}", err)
}
