//! Force model: per-step acceleration from the environment.
//!
//! Every particle receives, summed into its accumulator:
//!
//! ```text
//! gravity      (0, g, 0)
//! wind         wind * wind_resistance + turbulence
//! rain         rain * water_absorption
//! ripple       (0, sin(t + x) * amplitude, 0)
//! ```
//!
//! Nothing is clamped; large inputs produce large accelerations.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use clothesline_material::MaterialPreset;

use crate::config::SolverConfig;
use crate::state::ParticleStore;

/// Scene-wide force vectors for one step, read by every cloth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StepForces {
    /// Base wind before material scaling.
    pub wind: Vec3,
    /// Base rain before material scaling.
    pub rain: Vec3,
}

impl StepForces {
    /// Creates a force pair.
    pub fn new(wind: Vec3, rain: Vec3) -> Self {
        Self { wind, rain }
    }
}

/// Source of per-particle wind turbulence.
///
/// Called once per particle per step; implementations decide whether the
/// noise is seeded, entropy-driven, or absent.
pub trait Turbulence: Send {
    /// Returns the next turbulence vector.
    fn sample(&mut self) -> Vec3;
}

/// Uniform noise with each component in `[-amplitude, amplitude]`.
pub struct RandomTurbulence<R: Rng + Send = StdRng> {
    rng: R,
    amplitude: f32,
}

impl RandomTurbulence<StdRng> {
    /// Entropy-seeded turbulence; every run differs.
    pub fn from_entropy(amplitude: f32) -> Self {
        Self::with_rng(StdRng::from_entropy(), amplitude)
    }

    /// Deterministic turbulence for reproducible runs.
    pub fn seeded(seed: u64, amplitude: f32) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), amplitude)
    }
}

impl<R: Rng + Send> RandomTurbulence<R> {
    /// Wraps any generator.
    pub fn with_rng(rng: R, amplitude: f32) -> Self {
        Self {
            rng,
            amplitude: amplitude.abs(),
        }
    }

    /// Half-width of the distribution.
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }
}

impl<R: Rng + Send> Turbulence for RandomTurbulence<R> {
    fn sample(&mut self) -> Vec3 {
        if self.amplitude == 0.0 {
            return Vec3::ZERO;
        }
        let a = self.amplitude;
        Vec3::new(
            self.rng.gen_range(-a..=a),
            self.rng.gen_range(-a..=a),
            self.rng.gen_range(-a..=a),
        )
    }
}

/// Turbulence disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTurbulence;

impl Turbulence for NoTurbulence {
    fn sample(&mut self) -> Vec3 {
        Vec3::ZERO
    }
}

/// Accumulates environmental forces into a particle store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceModel {
    gravity: Vec3,
    oscillation_amplitude: f32,
}

impl ForceModel {
    /// Creates a model with vertical gravity `g` and the given ripple
    /// amplitude.
    pub fn new(gravity: f32, oscillation_amplitude: f32) -> Self {
        Self {
            gravity: Vec3::new(0.0, gravity, 0.0),
            oscillation_amplitude,
        }
    }

    /// Creates a model from solver configuration.
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.gravity, config.oscillation_amplitude)
    }

    /// The gravity vector applied to every particle.
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Adds this step's forces to every particle's accumulator, pinned
    /// particles included.
    ///
    /// `time_seconds` drives the ripple; turbulence is sampled once per
    /// particle.
    pub fn accumulate(
        &self,
        store: &mut ParticleStore,
        material: &MaterialPreset,
        forces: &StepForces,
        time_seconds: f64,
        turbulence: &mut dyn Turbulence,
    ) {
        let wind = forces.wind * material.wind_resistance;
        let rain = forces.rain * material.water_absorption;

        for (p, acc) in store.position.iter().zip(store.acceleration.iter_mut()) {
            *acc += self.gravity;
            *acc += wind + turbulence.sample();
            *acc += rain;
            *acc += Vec3::new(0.0, self.ripple(time_seconds, p.x), 0.0);
        }
    }

    /// Vertical ripple acceleration at time `t` for a particle at `x`.
    #[inline]
    pub fn ripple(&self, t: f64, x: f32) -> f32 {
        (t + x as f64).sin() as f32 * self.oscillation_amplitude
    }
}

impl Default for ForceModel {
    fn default() -> Self {
        Self::from_config(&SolverConfig::default())
    }
}
