//! Headless scenario description, loaded from TOML.
//!
//! ```toml
//! frames = 240
//! frame_dt = 0.016
//! seed = 7
//! cloths = ["Silk", "Denim"]
//!
//! [scene]
//! wind_strength = 4.0
//!
//! [line]
//! segments_x = 10
//! segments_y = 10
//!
//! [solver]
//! relaxation_passes = 5
//!
//! [[materials]]
//! name = "Linen"
//! stiffness = 900.0
//! damping = 0.12
//! mass = 0.25
//! windResistance = 0.9
//! waterAbsorption = 1.3
//! ```
//!
//! Every table and key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use clothesline_material::{MaterialCatalog, MaterialPreset};
use clothesline_solver::{ManualClock, NoTurbulence, RandomTurbulence, SolverConfig};
use clothesline_types::{ClothError, ClothResult};

use crate::layout::LineLayout;
use crate::line::Clothesline;
use crate::params::SceneParams;

/// A complete headless run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Frames to simulate.
    pub frames: u32,
    /// Real seconds per frame, before time scaling.
    pub frame_dt: f64,
    /// Turbulence seed. Entropy-seeded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Materials to hang, in order.
    pub cloths: Vec<String>,
    pub scene: SceneParams,
    pub line: LineLayout,
    pub solver: SolverConfig,
    /// Extra presets added to the built-in catalog.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<MaterialPreset>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            frame_dt: 1.0 / 60.0,
            seed: None,
            cloths: vec!["Silk".into(), "Cotton".into(), "Denim".into()],
            scene: SceneParams::default(),
            line: LineLayout::default(),
            solver: SolverConfig::default(),
            materials: Vec::new(),
        }
    }
}

impl ScenarioConfig {
    /// Parses a scenario from TOML text.
    pub fn from_toml_str(text: &str) -> ClothResult<Self> {
        toml::from_str(text).map_err(|e| ClothError::Serialization(e.to_string()))
    }

    /// Reads and parses a scenario file.
    pub fn load(path: impl AsRef<Path>) -> ClothResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serializes the scenario back to TOML.
    pub fn to_toml_string(&self) -> ClothResult<String> {
        toml::to_string(self).map_err(|e| ClothError::Serialization(e.to_string()))
    }

    /// Built-in presets plus the scenario's extra materials.
    pub fn catalog(&self) -> MaterialCatalog {
        let mut catalog = MaterialCatalog::with_defaults();
        for preset in &self.materials {
            catalog.register(preset.clone());
        }
        catalog
    }

    /// Checks every section and that every named material exists.
    pub fn validate(&self) -> ClothResult<()> {
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            return Err(ClothError::InvalidConfig(format!(
                "frame_dt must be > 0 (got {})",
                self.frame_dt
            )));
        }
        self.scene.validate()?;
        self.line.validate()?;
        self.solver.validate()?;

        for preset in &self.materials {
            if !preset.is_valid() {
                return Err(ClothError::InvalidConfig(format!(
                    "material '{}' has invalid properties",
                    preset.name
                )));
            }
        }
        let catalog = self.catalog();
        catalog.require(&self.scene.selected_material)?;
        for name in &self.cloths {
            catalog.require(name)?;
        }
        Ok(())
    }

    /// Builds an empty line for this scenario.
    ///
    /// The ripple clock is manual so that runs with a seed are
    /// reproducible; the frame driver ticks it.
    pub fn build_line(&self) -> ClothResult<Clothesline> {
        let line = Clothesline::new(self.line.clone(), self.solver.clone())?
            .with_catalog(self.catalog())
            .with_clock(Box::new(ManualClock::default()));

        let mut line = match self.seed {
            Some(_) if self.solver.turbulence_amplitude == 0.0 => {
                line.with_turbulence(Box::new(NoTurbulence))
            }
            Some(seed) => line.with_turbulence(Box::new(RandomTurbulence::seeded(
                seed,
                self.solver.turbulence_amplitude,
            ))),
            None => line,
        };
        line.select_material(&self.scene.selected_material)?;
        Ok(line)
    }
}
