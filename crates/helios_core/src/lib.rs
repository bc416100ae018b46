//! # Helios Core
//!
//! Core data structures and types for the Helios nomenclature dataset.
//!
//! The dataset describes planets, a tree of materials, production units, the
//! bill of materials (BOM) of each unit and the assembly graph linking units
//! to their components. Before the dataset is published it is run through an
//! integrity validator; this crate holds everything that validator and its
//! callers share.
//!
//! ## Key Concepts
//!
//! - **Dataset**: an immutable snapshot of all tables
//! - **DatasetSource**: where a snapshot is acquired from
//! - **IntegrityViolation**: one finding of an integrity check
//! - **ValidationReport**: per-check outcomes plus the overall verdict
//!
//! ## Example
//!
//! ```rust
//! use helios_core::{DatasetBuilder, UnitBuilder};
//!
//! let dataset = DatasetBuilder::new()
//!     .planet("earth", "Earth")
//!     .category("robots", "Robots")
//!     .unit(UnitBuilder::new("ROB-001", "robots", "Gen-1 rover").assembly(true))
//!     .build();
//!
//! assert!(dataset.unit("ROB-001").is_some_and(|u| u.is_assembly));
//! ```

pub mod builder;
pub mod dataset;
pub mod error;
pub mod model;
pub mod validator;

pub use builder::*;
pub use dataset::*;
pub use error::*;
pub use model::*;
pub use validator::*;
