//! Builder pattern for assembling datasets in code.
//!
//! Seeding proper is done elsewhere; these builders exist for tests and for
//! callers that embed small datasets.

use crate::{
    Category, Criticality, Dataset, Material, Planet, PlanetMaterial, Unit, UnitComponent,
    UnitMaterial,
};

/// Builder for creating a [`Dataset`].
///
/// Rows are appended in call order, which is the declaration order every
/// check reports in.
///
/// # Example
///
/// ```rust
/// use helios_core::{DatasetBuilder, UnitBuilder};
///
/// let dataset = DatasetBuilder::new()
///     .planet("mercury", "Mercury")
///     .category("robots", "Robots")
///     .root_material("MAT-METAL", "Metals")
///     .material("MAT-AL", "MAT-METAL", "Aluminium")
///     .sourced("mercury", "MAT-AL")
///     .unit(UnitBuilder::new("ROB-001", "robots", "Miner").produced_on("mercury"))
///     .bom("ROB-001", "MAT-AL", 100.0)
///     .build();
///
/// assert_eq!(dataset.units.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a planet with only an id and a name.
    pub fn planet(self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.planet_record(Planet {
            id: id.into(),
            name: name.into(),
            gravity_m_s2: None,
            solar_constant_w_m2: None,
            escape_velocity_km_s: None,
            has_atmosphere: false,
            sources: Vec::new(),
        })
    }

    /// Adds a fully specified planet.
    pub fn planet_record(mut self, planet: Planet) -> Self {
        self.dataset.planets.push(planet);
        self
    }

    /// Adds a unit category.
    pub fn category(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.dataset.categories.push(Category {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    /// Adds a root (category) material.
    pub fn root_material(self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.material_record(new_material(id.into(), None, name.into()))
    }

    /// Adds a material under `parent_id`.
    pub fn material(
        self,
        id: impl Into<String>,
        parent_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.material_record(new_material(id.into(), Some(parent_id.into()), name.into()))
    }

    /// Adds a material under `parent_id` with a criticality tier.
    pub fn critical_material(
        self,
        id: impl Into<String>,
        parent_id: impl Into<String>,
        name: impl Into<String>,
        criticality: Criticality,
    ) -> Self {
        let mut material = new_material(id.into(), Some(parent_id.into()), name.into());
        material.criticality = Some(criticality);
        self.material_record(material)
    }

    /// Adds a fully specified material.
    pub fn material_record(mut self, material: Material) -> Self {
        self.dataset.materials.push(material);
        self
    }

    /// Records that `material_id` can be sourced on `planet_id`.
    pub fn sourced(mut self, planet_id: impl Into<String>, material_id: impl Into<String>) -> Self {
        self.dataset.planet_materials.push(PlanetMaterial {
            planet_id: planet_id.into(),
            material_id: material_id.into(),
            concentration_pct: None,
            notes: None,
        });
        self
    }

    /// Adds a unit.
    pub fn unit(mut self, unit: UnitBuilder) -> Self {
        self.dataset.units.push(unit.build());
        self
    }

    /// Adds a BOM entry.
    pub fn bom(
        mut self,
        unit_id: impl Into<String>,
        material_id: impl Into<String>,
        fraction_pct: f64,
    ) -> Self {
        self.dataset.unit_materials.push(UnitMaterial {
            unit_id: unit_id.into(),
            material_id: material_id.into(),
            fraction_pct: Some(fraction_pct),
        });
        self
    }

    /// Adds an assembly → component edge.
    pub fn component(
        mut self,
        assembly_id: impl Into<String>,
        component_id: impl Into<String>,
        quantity: u32,
    ) -> Self {
        self.dataset.unit_components.push(UnitComponent {
            assembly_id: assembly_id.into(),
            component_id: component_id.into(),
            quantity,
        });
        self
    }

    /// Builds the dataset.
    pub fn build(self) -> Dataset {
        self.dataset
    }
}

fn new_material(id: String, parent_id: Option<String>, name: String) -> Material {
    Material {
        id,
        parent_id,
        name,
        symbol: None,
        description: None,
        criticality: None,
        sources: Vec::new(),
    }
}

/// Builder for creating a [`Unit`].
///
/// Units default to simple (non-assembly) units produced on the default
/// import planet.
#[derive(Debug, Clone)]
pub struct UnitBuilder {
    unit: Unit,
}

impl UnitBuilder {
    /// Creates a unit builder with required fields.
    pub fn new(
        id: impl Into<String>,
        category_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            unit: Unit {
                id: id.into(),
                category_id: category_id.into(),
                name: name.into(),
                description: None,
                mass_kg: None,
                power_kw: None,
                parent_id: None,
                is_assembly: false,
                production_planet_id: Some(crate::DEFAULT_IMPORT_PLANET.to_string()),
                sources: Vec::new(),
            },
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.unit.description = Some(description.into());
        self
    }

    /// Sets the mass in kilograms.
    pub fn mass_kg(mut self, mass: f64) -> Self {
        self.unit.mass_kg = Some(mass);
        self
    }

    /// Sets the power draw in kilowatts.
    pub fn power_kw(mut self, power: f64) -> Self {
        self.unit.power_kw = Some(power);
        self
    }

    /// Sets the physical container unit.
    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.unit.parent_id = Some(parent_id.into());
        self
    }

    /// Flags the unit as an assembly.
    pub fn assembly(mut self, is_assembly: bool) -> Self {
        self.unit.is_assembly = is_assembly;
        self
    }

    /// Sets the production planet.
    pub fn produced_on(mut self, planet_id: impl Into<String>) -> Self {
        self.unit.production_planet_id = Some(planet_id.into());
        self
    }

    /// Adds a citation.
    pub fn source(mut self, citation: impl Into<String>) -> Self {
        self.unit.sources.push(citation.into());
        self
    }

    /// Builds the unit.
    pub fn build(self) -> Unit {
        self.unit
    }
}
