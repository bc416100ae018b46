use anyhow::{Context, Result};
use helios_parser::DatasetFile;
use helios_validator::{IntegrityValidator, ValidatorConfig};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};

use crate::output;

pub fn execute(
    dataset_path: &str,
    format: &str,
    config_path: Option<&Path>,
    import_planet: Option<String>,
    tolerance: Option<f64>,
    verbose: bool,
) -> Result<ExitCode> {
    info!("Validating dataset: {}", dataset_path);

    let config = resolve_config(config_path, import_planet, tolerance)?;
    debug!(
        "Import planet: {}, BOM tolerance: ±{}%",
        config.import_planet_id, config.bom_tolerance_pct
    );

    let source = DatasetFile::new(dataset_path);
    let dataset = match super::acquire(&source) {
        Ok(dataset) => dataset,
        Err(code) => return Ok(code),
    };

    let validator = IntegrityValidator::with_context(config.to_context(verbose));
    let report = validator.run(&dataset);

    output::print_validation_report(&report, format, verbose)?;

    if report.passed {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Merges the config file, if any, with command-line overrides.
fn resolve_config(
    config_path: Option<&Path>,
    import_planet: Option<String>,
    tolerance: Option<f64>,
) -> Result<ValidatorConfig> {
    let mut builder = ValidatorConfig::builder();

    if let Some(path) = config_path {
        let base = ValidatorConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;
        builder = builder.base(base);
    }
    if let Some(planet_id) = import_planet {
        builder = builder.import_planet(planet_id);
    }
    if let Some(tolerance) = tolerance {
        builder = builder.bom_tolerance(tolerance);
    }

    builder.build().context("Invalid validator settings")
}
