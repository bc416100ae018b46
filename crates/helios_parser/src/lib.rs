//! Snapshot loader for Helios nomenclature datasets.
//!
//! A snapshot comes in one of two shapes:
//!
//! - a single document (JSON, YAML or TOML) with one top-level key per table;
//! - an export directory holding one JSON array per table
//!   (`planets.json`, `materials.json`, ..., `unit_components.json`).
//!
//! Either way the rows are mapped into the typed records of `helios_core`
//! at this boundary, so the integrity checks never see untyped data.
//!
//! # Example
//!
//! ```rust
//! use helios_parser::parse_yaml;
//!
//! let yaml = r#"
//! planets:
//!   - id: mercury
//!     name: Mercury
//! units:
//!   - id: ROB-001
//!     category_id: robots
//!     name: Miner
//!     production_planet_id: mercury
//! "#;
//!
//! let dataset = parse_yaml(yaml).expect("Failed to parse dataset");
//! assert_eq!(dataset.units.len(), 1);
//! ```

use helios_core::{Dataset, DatasetError, DatasetSource};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading a snapshot.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The snapshot path does not exist, or an export directory holds no table
    #[error("Snapshot not found: {}", .0.display())]
    NotFound(PathBuf),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// Entity table holds the same identifier twice
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

impl From<ParserError> for DatasetError {
    fn from(err: ParserError) -> Self {
        match err {
            ParserError::NotFound(path) => DatasetError::SnapshotMissing(path.display().to_string()),
            ParserError::Dataset(inner) => inner,
            other => DatasetError::Load(other.to_string()),
        }
    }
}

/// Supported snapshot document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// File names of an export directory, in load order.
pub const EXPORT_FILES: [&str; 7] = [
    "planets.json",
    "materials.json",
    "categories.json",
    "units.json",
    "planet_materials.json",
    "unit_materials.json",
    "unit_components.json",
];

/// Parse a snapshot from a JSON document.
pub fn parse_json(content: &str) -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_str(content)?;
    Ok(dataset)
}

/// Parse a snapshot from a YAML document.
pub fn parse_yaml(content: &str) -> Result<Dataset> {
    let dataset: Dataset = serde_yaml_ng::from_str(content)?;
    Ok(dataset)
}

/// Parse a snapshot from a TOML document.
///
/// # Example
///
/// ```rust
/// use helios_parser::parse_toml;
///
/// let toml = r#"
/// [[materials]]
/// id = "MAT-METAL"
/// name = "Metals"
///
/// [[materials]]
/// id = "MAT-AL"
/// parent_id = "MAT-METAL"
/// name = "Aluminium"
/// criticality = "critical"
/// "#;
///
/// let dataset = parse_toml(toml).unwrap();
/// assert_eq!(dataset.materials.len(), 2);
/// ```
pub fn parse_toml(content: &str) -> Result<Dataset> {
    let dataset: Dataset =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(dataset)
}

/// Detect the snapshot format from a file path based on its extension.
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<SnapshotFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "json" => Ok(SnapshotFormat::Json),
        "yaml" | "yml" => Ok(SnapshotFormat::Yaml),
        "toml" => Ok(SnapshotFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a snapshot document with automatic format detection.
pub fn parse_file(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(ParserError::NotFound(path.to_path_buf()));
    }
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        SnapshotFormat::Json => parse_json(&content),
        SnapshotFormat::Yaml => parse_yaml(&content),
        SnapshotFormat::Toml => parse_toml(&content),
    }
}

/// Parse an export directory of per-table JSON arrays.
///
/// A missing table file yields an empty table. A directory without any of
/// the [`EXPORT_FILES`] is treated as a missing snapshot.
pub fn parse_export_dir(dir: &Path) -> Result<Dataset> {
    if !dir.is_dir() || !EXPORT_FILES.iter().any(|f| dir.join(f).is_file()) {
        return Err(ParserError::NotFound(dir.to_path_buf()));
    }

    Ok(Dataset {
        planets: read_table(dir, "planets.json")?,
        materials: read_table(dir, "materials.json")?,
        categories: read_table(dir, "categories.json")?,
        units: read_table(dir, "units.json")?,
        planet_materials: read_table(dir, "planet_materials.json")?,
        unit_materials: read_table(dir, "unit_materials.json")?,
        unit_components: read_table(dir, "unit_components.json")?,
    })
}

fn read_table<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dir.join(file);
    if !path.is_file() {
        debug!("Export table {} absent, treating as empty", file);
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)?;
    let rows: Vec<T> = serde_json::from_str(&content)?;
    debug!("Read {} rows from {}", rows.len(), file);
    Ok(rows)
}

/// Load a snapshot from a document or an export directory.
///
/// Primary keys are checked before the dataset is returned.
pub fn load(path: &Path) -> Result<Dataset> {
    let dataset = if path.is_dir() {
        parse_export_dir(path)?
    } else {
        parse_file(path)?
    };
    dataset.check_primary_keys()?;

    let counts = dataset.counts();
    info!(
        "Loaded snapshot {}: {} units, {} materials, {} BOM rows, {} assembly edges",
        path.display(),
        counts.units,
        counts.materials,
        counts.unit_materials,
        counts.unit_components
    );
    Ok(dataset)
}

/// A snapshot stored on disk.
#[derive(Debug, Clone)]
pub struct DatasetFile {
    path: PathBuf,
}

impl DatasetFile {
    /// Points at a snapshot document or export directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for DatasetFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> helios_core::Result<Dataset> {
        Ok(load(&self.path)?)
    }
}
