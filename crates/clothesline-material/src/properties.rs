//! Physical properties of a cloth material.

use serde::{Deserialize, Serialize};

/// An immutable, named set of cloth parameters.
///
/// | Field | Used by |
/// |---|---|
/// | `damping` | Integrator: fraction of the implicit velocity kept per step |
/// | `wind_resistance` | Force model: scales the base wind vector |
/// | `water_absorption` | Force model: scales the base rain vector |
/// | `mass` | Copied into every particle; not read by the integrator |
/// | `stiffness` | Informational only; the constraint solver is unweighted |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPreset {
    /// Display name (e.g., "Silk").
    pub name: String,

    /// Nominal stiffness shown to users.
    pub stiffness: f32,

    /// Velocity retention factor in `[0, 1]`. Lower values settle faster.
    pub damping: f32,

    /// Per-particle mass.
    pub mass: f32,

    /// Multiplier on the scene wind. Light fabrics catch more wind.
    #[serde(rename = "windResistance", alias = "wind_resistance")]
    pub wind_resistance: f32,

    /// Multiplier on the scene rain. Absorbent fabrics get heavier.
    #[serde(rename = "waterAbsorption", alias = "water_absorption")]
    pub water_absorption: f32,
}

impl MaterialPreset {
    /// Checks that every field is finite and that damping is a valid
    /// retention factor.
    pub fn is_valid(&self) -> bool {
        let finite = [
            self.stiffness,
            self.damping,
            self.mass,
            self.wind_resistance,
            self.water_absorption,
        ]
        .iter()
        .all(|v| v.is_finite());
        finite && (0.0..=1.0).contains(&self.damping) && self.mass > 0.0
    }
}
