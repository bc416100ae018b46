//! # Helios Validator
//!
//! Integrity validation engine for the Helios nomenclature dataset. Before
//! the dataset is published it must pass these checks, in order:
//!
//! 1. BOM fractions of every unit sum to 100% (±0.1)
//! 2. BOM rows reference existing materials and units
//! 3. Assembly edges start at assemblies and reference existing units
//! 4. The assembly containment graph is acyclic
//! 5. Every non-root material is sourced from some planet
//! 6. Every locally produced simple unit has a BOM
//! 7. Every non-root material is used by some BOM (warning only)
//!
//! ## Example
//!
//! ```rust
//! use helios_core::{DatasetBuilder, UnitBuilder};
//! use helios_validator::{IntegrityValidator, render_report};
//!
//! let dataset = DatasetBuilder::new()
//!     .unit(UnitBuilder::new("ROB-001", "robots", "Rover").assembly(true))
//!     .unit(UnitBuilder::new("ROB-002", "robots", "Crawler").assembly(true))
//!     .component("ROB-001", "ROB-002", 1)
//!     .component("ROB-002", "ROB-001", 1)
//!     .build();
//!
//! let report = IntegrityValidator::new().run(&dataset);
//! assert!(!report.passed);
//! assert!(render_report(&report, false).contains("Cycle: ROB-001 → ROB-002 → ROB-001"));
//! ```

mod assembly;
mod bom;
mod config;
mod coverage;
mod engine;
mod error;
mod graph;
mod report;

pub use assembly::*;
pub use bom::*;
pub use config::*;
pub use coverage::*;
pub use engine::*;
pub use error::*;
pub use graph::*;
pub use report::*;
