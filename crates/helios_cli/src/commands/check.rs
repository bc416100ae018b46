use anyhow::Result;
use helios_core::DatasetSource;
use helios_parser::DatasetFile;
use std::process::ExitCode;
use tracing::info;

use crate::output;

pub fn execute(dataset_path: &str) -> Result<ExitCode> {
    info!("Checking dataset snapshot: {}", dataset_path);

    let source = DatasetFile::new(dataset_path);
    let dataset = match super::acquire(&source) {
        Ok(dataset) => dataset,
        Err(code) => return Ok(code),
    };

    output::print_success(&format!("Snapshot loaded: {}", source.describe()));

    let counts = dataset.counts();
    println!("\nTables:");
    println!("  Planets:          {}", counts.planets);
    println!("  Materials:        {}", counts.materials);
    println!("  Categories:       {}", counts.categories);
    println!("  Units:            {}", counts.units);
    println!("  Planet sourcing:  {}", counts.planet_materials);
    println!("  BOM rows:         {}", counts.unit_materials);
    println!("  Assembly edges:   {}", counts.unit_components);
    println!("  Total rows:       {}", counts.total());

    if dataset.is_empty() {
        output::print_info("Snapshot holds no rows");
    }

    Ok(ExitCode::SUCCESS)
}
