//! End-to-end validation of on-disk snapshots.

use helios_core::ValidationContext;
use helios_parser::DatasetFile;
use helios_validator::{IntegrityValidator, validate};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_export(dir: &Path, unit_materials: &str) {
    fs::write(
        dir.join("planets.json"),
        r#"[
            {"id": "earth", "name": "Earth", "has_atmosphere": true},
            {"id": "moon", "name": "Moon", "gravity_m_s2": 1.62, "has_atmosphere": false}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("materials.json"),
        r#"[
            {"id": "MAT-METAL", "parent_id": null, "name": "Metals"},
            {"id": "MAT-AL", "parent_id": "MAT-METAL", "name": "Aluminium", "symbol": "Al", "criticality": "critical"},
            {"id": "MAT-FE", "parent_id": "MAT-METAL", "name": "Iron", "symbol": "Fe", "criticality": "high"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("categories.json"),
        r#"[{"id": "equipment", "name": "Equipment"}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("units.json"),
        r#"[
            {"id": "EQP-001", "category_id": "equipment", "name": "Truss", "mass_kg": 120.0,
             "is_assembly": false, "production_planet_id": "moon"},
            {"id": "EQP-002", "category_id": "equipment", "name": "Radio", "is_assembly": false,
             "production_planet_id": "earth"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("planet_materials.json"),
        r#"[
            {"planet_id": "moon", "material_id": "MAT-AL", "concentration_pct": 13.0},
            {"planet_id": "moon", "material_id": "MAT-FE", "concentration_pct": 4.5}
        ]"#,
    )
    .unwrap();
    fs::write(dir.join("unit_materials.json"), unit_materials).unwrap();
}

#[test]
fn test_valid_export_directory() {
    let dir = TempDir::new().unwrap();
    write_export(
        dir.path(),
        r#"[
            {"unit_id": "EQP-001", "material_id": "MAT-AL", "fraction_pct": 60.0},
            {"unit_id": "EQP-001", "material_id": "MAT-FE", "fraction_pct": 40.0}
        ]"#,
    );

    let validator = IntegrityValidator::with_context(ValidationContext::new().with_verbose(true));
    let mut out = Vec::new();
    let passed = validator
        .validate_source(&DatasetFile::new(dir.path()), &mut out)
        .unwrap();

    assert!(passed);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Validating dataset...\n\
         ✓ BOM: fractions sum to 100%\n\
         ✓ BOM: material/unit references\n\
         ✓ Assemblies: component references\n\
         ✓ Assemblies: circular containment\n\
         ✓ Materials: planet sourcing\n\
         ✓ Units: BOM present\n\
         ✅ Dataset is valid\n"
    );
}

#[test]
fn test_broken_export_directory() {
    let dir = TempDir::new().unwrap();
    write_export(
        dir.path(),
        r#"[
            {"unit_id": "EQP-001", "material_id": "MAT-AL", "fraction_pct": 60.0},
            {"unit_id": "EQP-001", "material_id": "MAT-FE", "fraction_pct": 30.0}
        ]"#,
    );

    let mut out = Vec::new();
    let passed = IntegrityValidator::new()
        .validate_source(&DatasetFile::new(dir.path()), &mut out)
        .unwrap();

    assert!(!passed);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "✗ BOM: fractions sum to 100%\n\
         \x20 EQP-001 (Truss): 90% instead of 100%\n\
         ❌ Validation failed\n"
    );
}

#[test]
fn test_missing_snapshot_is_fatal() {
    let dir = TempDir::new().unwrap();
    let source = DatasetFile::new(dir.path().join("nomenclature.json"));

    let mut out = Vec::new();
    let err = IntegrityValidator::new()
        .validate_source(&source, &mut out)
        .unwrap_err();

    assert!(err.is_snapshot_missing());
    assert!(out.is_empty());
    assert!(!validate(&source, false));
}

#[test]
fn test_empty_directory_is_missing() {
    let dir = TempDir::new().unwrap();
    let err = IntegrityValidator::new()
        .validate_source(&DatasetFile::new(dir.path()), &mut Vec::new())
        .unwrap_err();
    assert!(err.is_snapshot_missing());
}

#[test]
fn test_export_with_null_columns_validates() {
    let dir = TempDir::new().unwrap();
    write_export(
        dir.path(),
        r#"[
            {"unit_id": "EQP-001", "material_id": "MAT-AL", "fraction_pct": 100.0},
            {"unit_id": "EQP-001", "material_id": "MAT-FE", "fraction_pct": null}
        ]"#,
    );
    // A unit whose production planet was never filled in
    fs::write(
        dir.path().join("units.json"),
        r#"[
            {"id": "EQP-001", "category_id": "equipment", "name": "Truss", "is_assembly": false,
             "production_planet_id": "moon"},
            {"id": "EQP-009", "category_id": "equipment", "name": "Spare", "is_assembly": false,
             "production_planet_id": null}
        ]"#,
    )
    .unwrap();

    let mut out = Vec::new();
    let passed = IntegrityValidator::new()
        .validate_source(&DatasetFile::new(dir.path()), &mut out)
        .unwrap();

    assert!(passed, "{}", String::from_utf8_lossy(&out));
}
