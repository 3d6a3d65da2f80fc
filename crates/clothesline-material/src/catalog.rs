//! Material catalog with the built-in cloth presets.

use std::collections::BTreeMap;

use clothesline_types::{ClothError, ClothResult};

use crate::properties::MaterialPreset;

/// A named collection of material presets.
///
/// Names are matched exactly ("Silk", not "silk"). Iteration order is
/// alphabetical so listings are stable.
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    materials: BTreeMap<String, MaterialPreset>,
}

impl MaterialCatalog {
    /// Creates a catalog with the three built-in presets.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::empty();
        catalog.register(silk());
        catalog.register(cotton());
        catalog.register(denim());
        catalog
    }

    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self {
            materials: BTreeMap::new(),
        }
    }

    /// Registers a preset. Overwrites if the name already exists.
    pub fn register(&mut self, preset: MaterialPreset) {
        self.materials.insert(preset.name.clone(), preset);
    }

    /// Looks up a preset by name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<&MaterialPreset> {
        self.materials.get(name)
    }

    /// Looks up a preset by name, reporting the available names on failure.
    pub fn require(&self, name: &str) -> ClothResult<&MaterialPreset> {
        self.get(name).ok_or_else(|| ClothError::UnknownMaterial {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    /// Returns all registered names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        self.materials.keys().map(|s| s.as_str()).collect()
    }

    /// Iterates over all presets in name order.
    pub fn iter(&self) -> impl Iterator<Item = &MaterialPreset> {
        self.materials.values()
    }

    /// Returns the number of registered presets.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Built-in Presets ─────────────────────────────────────────────────

/// Silk: light and lively; catches the most wind and soaks up rain.
fn silk() -> MaterialPreset {
    MaterialPreset {
        name: "Silk".into(),
        stiffness: 300.0,
        damping: 0.02,
        mass: 0.1,
        wind_resistance: 1.5,
        water_absorption: 1.2,
    }
}

/// Cotton: medium weight; gets very heavy when wet.
fn cotton() -> MaterialPreset {
    MaterialPreset {
        name: "Cotton".into(),
        stiffness: 800.0,
        damping: 0.1,
        mass: 0.2,
        wind_resistance: 1.0,
        water_absorption: 1.5,
    }
}

/// Denim: heavy and stiff; shrugs off wind and water.
fn denim() -> MaterialPreset {
    MaterialPreset {
        name: "Denim".into(),
        stiffness: 1500.0,
        damping: 0.2,
        mass: 0.3,
        wind_resistance: 0.7,
        water_absorption: 0.8,
    }
}
