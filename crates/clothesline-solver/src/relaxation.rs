//! Iterative constraint relaxation (Gauss-Seidel).
//!
//! Each pass walks the constraint list in order and moves both endpoints
//! halfway toward the rest length, in place. Later constraints see the
//! corrections of earlier ones, within a pass and across passes.

use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::constraints::ConstraintSet;
use crate::state::ParticleStore;

/// Outcome of one call to [`ConstraintSolver::relax`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RelaxationReport {
    /// Passes performed.
    pub passes: u32,
    /// Constraint visits skipped for near-zero length, summed over passes.
    pub skipped: u32,
    /// Total squared length error before the first pass.
    pub initial_error: f64,
    /// Total squared length error after the last pass.
    pub final_error: f64,
}

/// Fixed-pass position-based constraint solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintSolver {
    passes: u32,
    min_distance: f32,
}

impl ConstraintSolver {
    /// Creates a solver running `passes` sweeps; pairs closer than
    /// `min_distance` are left alone.
    pub fn new(passes: u32, min_distance: f32) -> Self {
        Self {
            passes,
            min_distance,
        }
    }

    /// Creates a solver from solver configuration.
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.relaxation_passes, config.min_constraint_distance)
    }

    /// Number of passes per call to [`relax`](Self::relax).
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Runs every pass and reports the error before and after.
    pub fn relax(&self, store: &mut ParticleStore, constraints: &ConstraintSet) -> RelaxationReport {
        let initial_error = constraints.squared_error(&store.position);
        let mut skipped = 0;
        for _ in 0..self.passes {
            skipped += self.relax_pass(store, constraints);
        }
        RelaxationReport {
            passes: self.passes,
            skipped,
            initial_error,
            final_error: constraints.squared_error(&store.position),
        }
    }

    /// One sweep over all constraints. Returns how many were skipped.
    pub fn relax_pass(&self, store: &mut ParticleStore, constraints: &ConstraintSet) -> u32 {
        let mut skipped = 0;

        for c in constraints {
            let (a, b) = (c.a as usize, c.b as usize);
            let delta = store.position[b] - store.position[a];
            let distance = delta.length();
            if distance < self.min_distance {
                skipped += 1;
                continue;
            }

            let half = delta * (1.0 - c.rest_length / distance) * 0.5;
            if !store.is_pinned(a) {
                store.position[a] += half;
            }
            if !store.is_pinned(b) {
                store.position[b] -= half;
            }
        }

        skipped
    }
}

impl Default for ConstraintSolver {
    fn default() -> Self {
        Self::from_config(&SolverConfig::default())
    }
}
