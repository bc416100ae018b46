//! Configuration for the integrity validator.
//!
//! A config file is plain TOML:
//!
//! ```toml
//! import_planet_id = "earth"
//! bom_tolerance_pct = 0.1
//! ```
//!
//! Every key is optional and falls back to its default.

use crate::ConfigError;
use helios_core::{DEFAULT_BOM_TOLERANCE_PCT, DEFAULT_IMPORT_PLANET, ValidationContext};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Validator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Production planet meaning "imported"
    pub import_planet_id: String,

    /// Allowed absolute deviation of BOM sums from 100%, in percentage points
    pub bom_tolerance_pct: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            import_planet_id: DEFAULT_IMPORT_PLANET.to_string(),
            bom_tolerance_pct: DEFAULT_BOM_TOLERANCE_PCT,
        }
    }
}

impl ValidatorConfig {
    /// Creates a new builder for `ValidatorConfig`.
    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::default()
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ValidatorConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.import_planet_id.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "import_planet_id cannot be empty".to_string(),
            ));
        }

        if !self.bom_tolerance_pct.is_finite() || self.bom_tolerance_pct < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "bom_tolerance_pct must be a non-negative number, got {}",
                self.bom_tolerance_pct
            )));
        }

        Ok(())
    }

    /// Turns the settings into a validation context.
    pub fn to_context(&self, verbose: bool) -> ValidationContext {
        ValidationContext::new()
            .with_verbose(verbose)
            .with_import_planet(self.import_planet_id.clone())
            .with_bom_tolerance(self.bom_tolerance_pct)
    }
}

/// Builder for `ValidatorConfig`.
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfigBuilder {
    base: Option<ValidatorConfig>,
    import_planet_id: Option<String>,
    bom_tolerance_pct: Option<f64>,
}

impl ValidatorConfigBuilder {
    /// Starts from an existing configuration instead of the defaults.
    pub fn base(mut self, config: ValidatorConfig) -> Self {
        self.base = Some(config);
        self
    }

    /// Sets the import-marker planet.
    pub fn import_planet(mut self, planet_id: impl Into<String>) -> Self {
        self.import_planet_id = Some(planet_id.into());
        self
    }

    /// Sets the BOM tolerance.
    pub fn bom_tolerance(mut self, tolerance_pct: f64) -> Self {
        self.bom_tolerance_pct = Some(tolerance_pct);
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<ValidatorConfig, ConfigError> {
        let mut config = self.base.unwrap_or_default();
        if let Some(planet_id) = self.import_planet_id {
            config.import_planet_id = planet_id;
        }
        if let Some(tolerance) = self.bom_tolerance_pct {
            config.bom_tolerance_pct = tolerance;
        }
        config.validate()?;
        Ok(config)
    }
}
