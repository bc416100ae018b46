//! Behavioural properties of the integrity validator.
//!
//! Each test starts from a small but realistic dataset that passes every
//! blocking check, perturbs it in one way and asserts which checks react.

use helios_core::{
    Criticality, Dataset, DatasetBuilder, IntegrityViolation, UnitBuilder, ValidationContext,
    ViolationKind,
};
use helios_validator::{IntegrityValidator, render_report};
use pretty_assertions::assert_eq;

fn baseline() -> DatasetBuilder {
    DatasetBuilder::new()
        .planet("earth", "Earth")
        .planet("mercury", "Mercury")
        .planet("moon", "Moon")
        .category("robots", "Robots")
        .category("equipment", "Equipment")
        .category("products", "Products")
        .root_material("MAT-METAL", "Metals")
        .root_material("MAT-NONMETAL", "Non-metals")
        .critical_material("MAT-AL", "MAT-METAL", "Aluminium", Criticality::Critical)
        .critical_material("MAT-FE", "MAT-METAL", "Iron", Criticality::Critical)
        .critical_material("MAT-SI", "MAT-NONMETAL", "Silicon", Criticality::Critical)
        .sourced("mercury", "MAT-AL")
        .sourced("moon", "MAT-AL")
        .sourced("mercury", "MAT-FE")
        .sourced("mercury", "MAT-SI")
        .unit(
            UnitBuilder::new("ROB-001", "robots", "Regolith miner")
                .assembly(true)
                .produced_on("mercury")
                .mass_kg(450.0),
        )
        .unit(UnitBuilder::new("EQP-001", "equipment", "Chassis").produced_on("mercury"))
        .unit(UnitBuilder::new("EQP-002", "equipment", "Solar panel").produced_on("mercury"))
        .unit(UnitBuilder::new("EQP-003", "equipment", "Flight computer").produced_on("earth"))
        .unit(UnitBuilder::new("PRD-001", "products", "Aluminium foil").produced_on("mercury"))
        .bom("EQP-001", "MAT-FE", 80.0)
        .bom("EQP-001", "MAT-AL", 20.0)
        .bom("EQP-002", "MAT-SI", 50.0)
        .bom("EQP-002", "MAT-AL", 45.0)
        .bom("EQP-002", "MAT-FE", 5.0)
        .bom("PRD-001", "MAT-AL", 100.0)
        .component("ROB-001", "EQP-001", 1)
        .component("ROB-001", "EQP-002", 4)
        .component("ROB-001", "EQP-003", 1)
}

fn run(dataset: &Dataset) -> helios_core::ValidationReport {
    IntegrityValidator::new().run(dataset)
}

fn failed_checks(dataset: &Dataset) -> Vec<&'static str> {
    run(dataset)
        .checks
        .iter()
        .filter(|c| c.is_blocking_failure())
        .map(|c| c.id)
        .collect()
}

#[test]
fn test_baseline_is_valid() {
    let report = run(&baseline().build());
    assert!(report.passed, "{}", render_report(&report, true));
    assert_eq!(report.stats.error_count, 0);
    assert_eq!(report.stats.warning_count, 0);
}

#[test]
fn test_validation_is_idempotent() {
    let dataset = baseline()
        .bom("PRD-001", "MAT-FE", 3.0)
        .component("EQP-001", "EQP-002", 1)
        .build();
    let validator = IntegrityValidator::with_context(ValidationContext::new().with_verbose(true));

    let first = validator.run(&dataset);
    let second = validator.run(&dataset);

    assert_eq!(first.passed, second.passed);
    assert_eq!(first.checks, second.checks);
    assert_eq!(render_report(&first, true), render_report(&second, true));
}

#[test]
fn test_bom_sum_property() {
    let passing = baseline()
        .unit(UnitBuilder::new("PRD-002", "products", "Casting").produced_on("mercury"))
        .bom("PRD-002", "MAT-FE", 40.0)
        .bom("PRD-002", "MAT-AL", 35.0)
        .bom("PRD-002", "MAT-SI", 25.0)
        .build();
    assert!(run(&passing).passed);

    let failing = baseline()
        .unit(UnitBuilder::new("PRD-002", "products", "Casting").produced_on("mercury"))
        .bom("PRD-002", "MAT-FE", 40.0)
        .bom("PRD-002", "MAT-AL", 35.0)
        .bom("PRD-002", "MAT-SI", 20.0)
        .build();
    let report = run(&failing);
    assert!(!report.passed);
    assert_eq!(failed_checks(&failing), vec!["bom_percentages"]);
    assert_eq!(
        report.check("bom_percentages").unwrap().violations,
        vec![IntegrityViolation::PercentageSum {
            unit_id: "PRD-002".to_string(),
            unit_name: "Casting".to_string(),
            total_pct: 95.0,
        }]
    );
}

#[test]
fn test_missing_material_is_only_a_reference_error() {
    // Swap Aluminium for an unknown material, keeping the sum at 100%
    let mut dataset = baseline().build();
    let row = dataset
        .unit_materials
        .iter_mut()
        .find(|um| um.unit_id == "PRD-001")
        .unwrap();
    row.material_id = "MAT-UNOBTAINIUM".to_string();

    let report = run(&dataset);
    assert_eq!(failed_checks(&dataset), vec!["bom_references"]);

    let kinds: Vec<ViolationKind> = report.errors().map(|v| v.kind()).collect();
    assert_eq!(kinds, vec![ViolationKind::ReferentialIntegrity]);
}

#[test]
fn test_cycle_detection() {
    let dataset = baseline()
        .unit(UnitBuilder::new("A", "robots", "Alpha").assembly(true).produced_on("mercury"))
        .unit(UnitBuilder::new("B", "robots", "Beta").assembly(true).produced_on("mercury"))
        .unit(UnitBuilder::new("C", "robots", "Gamma").assembly(true).produced_on("mercury"))
        .component("A", "B", 1)
        .component("B", "C", 1)
        .component("C", "A", 1)
        .build();

    let report = run(&dataset);
    assert_eq!(failed_checks(&dataset), vec!["assembly_cycles"]);
    assert_eq!(
        report.check("assembly_cycles").unwrap().violations,
        vec![IntegrityViolation::Cycle {
            path: vec!["A".into(), "B".into(), "C".into(), "A".into()],
        }]
    );
}

#[test]
fn test_acyclic_graph_of_same_size_passes() {
    let dataset = baseline()
        .unit(UnitBuilder::new("A", "robots", "Alpha").assembly(true).produced_on("mercury"))
        .unit(UnitBuilder::new("B", "robots", "Beta").assembly(true).produced_on("mercury"))
        .unit(UnitBuilder::new("C", "robots", "Gamma").assembly(true).produced_on("mercury"))
        .component("A", "B", 1)
        .component("B", "C", 1)
        .component("A", "C", 1)
        .build();

    assert!(run(&dataset).passed);
}

#[test]
fn test_self_loop_is_a_cycle() {
    let dataset = baseline().component("ROB-001", "ROB-001", 1).build();
    let report = run(&dataset);

    assert_eq!(failed_checks(&dataset), vec!["assembly_cycles"]);
    assert_eq!(
        report.check("assembly_cycles").unwrap().violations[0].to_string(),
        "Cycle: ROB-001 → ROB-001"
    );
}

#[test]
fn test_assembly_flag_enforced_whether_or_not_component_exists() {
    let existing = baseline().component("EQP-001", "EQP-002", 1).build();
    let missing = baseline().component("EQP-001", "EQP-404", 1).build();

    for dataset in [&existing, &missing] {
        let report = run(dataset);
        let violations = &report.check("assembly_references").unwrap().violations;
        assert!(violations.iter().any(|v| matches!(
            v,
            IntegrityViolation::NotAnAssembly { assembly_id, .. } if assembly_id == "EQP-001"
        )));
    }
}

#[test]
fn test_coverage_violations_disappear_once_rows_are_added() {
    let broken = baseline()
        .material("MAT-TI", "MAT-METAL", "Titanium")
        .unit(UnitBuilder::new("EQP-004", "equipment", "Mirror").produced_on("mercury"))
        .build();
    let report = run(&broken);

    assert_eq!(
        report.check("material_sourcing").unwrap().violations,
        vec![IntegrityViolation::UnsourcedMaterial {
            material_id: "MAT-TI".to_string(),
            material_name: "Titanium".to_string(),
        }]
    );
    assert_eq!(
        report.check("unit_bom_coverage").unwrap().violations,
        vec![IntegrityViolation::MissingBom {
            unit_id: "EQP-004".to_string(),
            unit_name: "Mirror".to_string(),
        }]
    );

    let fixed = baseline()
        .material("MAT-TI", "MAT-METAL", "Titanium")
        .sourced("moon", "MAT-TI")
        .unit(UnitBuilder::new("EQP-004", "equipment", "Mirror").produced_on("mercury"))
        .bom("EQP-004", "MAT-TI", 100.0)
        .build();
    let report = run(&fixed);
    assert!(report.check("material_sourcing").unwrap().is_clean());
    assert!(report.check("unit_bom_coverage").unwrap().is_clean());
    assert!(report.passed);
}

#[test]
fn test_unused_material_warning_does_not_block() {
    let dataset = baseline()
        .material("MAT-K", "MAT-NONMETAL", "Potassium")
        .sourced("mercury", "MAT-K")
        .build();

    let report = run(&dataset);
    assert!(report.passed);
    assert_eq!(report.stats.warning_count, 1);

    let text = render_report(&report, false);
    assert!(text.contains("⚠ Materials: unused (1)"));
    assert!(text.contains("MAT-K (Potassium) is not used"));
    assert!(text.ends_with("✅ Dataset is valid\n"));
}
