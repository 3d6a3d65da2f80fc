//! Solver configuration.
//!
//! Parameters shared by every cloth on a line: gravity, pass count, and
//! the amplitudes of the stochastic and periodic force terms.

use serde::{Deserialize, Serialize};

use clothesline_types::constants;
use clothesline_types::{ClothError, ClothResult};

/// Configuration for the cloth solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Vertical gravitational acceleration (negative is down).
    pub gravity: f32,

    /// Constraint relaxation passes per step.
    pub relaxation_passes: u32,

    /// Turbulence components are drawn uniformly from `[-a, a]`.
    /// Zero disables turbulence.
    pub turbulence_amplitude: f32,

    /// Peak vertical acceleration of the ripple term.
    pub oscillation_amplitude: f32,

    /// Constraints shorter than this are skipped for the pass.
    pub min_constraint_distance: f32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gravity: constants::GRAVITY,
            relaxation_passes: constants::RELAXATION_PASSES,
            turbulence_amplitude: constants::TURBULENCE_AMPLITUDE,
            oscillation_amplitude: constants::OSCILLATION_AMPLITUDE,
            min_constraint_distance: constants::MIN_CONSTRAINT_DISTANCE,
        }
    }
}

impl SolverConfig {
    /// Default config without turbulence, for reproducible runs.
    pub fn calm() -> Self {
        Self {
            turbulence_amplitude: 0.0,
            ..Default::default()
        }
    }

    /// Checks that every value is finite and non-negative where required.
    pub fn validate(&self) -> ClothResult<()> {
        if !self.gravity.is_finite() {
            return Err(ClothError::InvalidConfig("gravity must be finite".into()));
        }
        if !(self.turbulence_amplitude.is_finite() && self.turbulence_amplitude >= 0.0) {
            return Err(ClothError::InvalidConfig(format!(
                "turbulence_amplitude must be >= 0 (got {})",
                self.turbulence_amplitude
            )));
        }
        if !self.oscillation_amplitude.is_finite() {
            return Err(ClothError::InvalidConfig(
                "oscillation_amplitude must be finite".into(),
            ));
        }
        if !(self.min_constraint_distance.is_finite() && self.min_constraint_distance > 0.0) {
            return Err(ClothError::InvalidConfig(format!(
                "min_constraint_distance must be > 0 (got {})",
                self.min_constraint_distance
            )));
        }
        Ok(())
    }
}
