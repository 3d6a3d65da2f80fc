//! Physical constants and simulation defaults.

/// Gravitational acceleration along Y (m/s²). Negative points down.
pub const GRAVITY: f32 = -9.81;

/// Number of constraint relaxation passes per simulation step.
pub const RELAXATION_PASSES: u32 = 5;

/// Half-width of the uniform turbulence distribution, per component.
pub const TURBULENCE_AMPLITUDE: f32 = 10.0;

/// Peak vertical acceleration of the time-based ripple.
pub const OSCILLATION_AMPLITUDE: f32 = 0.1;

/// Constraints whose endpoints are closer than this are skipped.
pub const MIN_CONSTRAINT_DISTANCE: f32 = 1.0e-6;

/// Factor applied to real elapsed time before each step.
pub const TIME_SCALE: f32 = 3.0;
