//! A single simulated cloth.
//!
//! Owns its particles, constraints, and render mesh exclusively; dropping
//! a [`Cloth`] releases all of them.

use std::time::Instant;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use clothesline_material::MaterialPreset;
use clothesline_mesh::generators::cloth_grid;
use clothesline_mesh::normals::compute_vertex_normals;
use clothesline_mesh::{GridLayout, TriangleMesh};

use crate::config::SolverConfig;
use crate::constraints::{ConstraintKind, ConstraintSet};
use crate::forces::{ForceModel, StepForces, Turbulence};
use crate::integrator::integrate;
use crate::relaxation::{ConstraintSolver, RelaxationReport};
use crate::state::ParticleStore;

/// Result of one [`Cloth::simulate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Constraint relaxation summary.
    pub relaxation: RelaxationReport,
    /// Kinetic energy of the free particles after integration.
    pub kinetic_energy: f64,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}

/// Summary of a cloth for display, e.g. an info card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothInfo {
    pub material: String,
    pub mass: f32,
    pub stiffness: f32,
    pub wind_resistance: f32,
    pub water_absorption: f32,
    pub particle_count: usize,
    pub structural_constraints: usize,
    pub shear_constraints: usize,
}

/// One cloth instance: grid, material, and solver state.
#[derive(Debug, Clone)]
pub struct Cloth {
    layout: GridLayout,
    anchor: Vec3,
    material: MaterialPreset,
    particles: ParticleStore,
    constraints: ConstraintSet,
    mesh: TriangleMesh,
    force_model: ForceModel,
    relaxer: ConstraintSolver,
}

impl Cloth {
    /// Builds a flat cloth on `layout` at `anchor`, with `material` bound
    /// for its whole lifetime.
    pub fn new(
        layout: GridLayout,
        material: MaterialPreset,
        anchor: Vec3,
        config: &SolverConfig,
    ) -> Self {
        let particles = ParticleStore::from_grid(&layout, anchor, material.mass);
        let constraints = ConstraintSet::from_grid(&layout);
        let mut mesh = cloth_grid(&layout, anchor);
        compute_vertex_normals(&mut mesh);

        Self {
            layout,
            anchor,
            material,
            particles,
            constraints,
            mesh,
            force_model: ForceModel::from_config(config),
            relaxer: ConstraintSolver::from_config(config),
        }
    }

    /// Advances the cloth by one step.
    ///
    /// Forces, integration, and every relaxation pass run to completion,
    /// then the render mesh receives the new positions and normals.
    /// `dt` is used as given.
    pub fn simulate(
        &mut self,
        forces: &StepForces,
        dt: f32,
        time_seconds: f64,
        turbulence: &mut dyn Turbulence,
    ) -> StepReport {
        let start = Instant::now();

        // 1. Accumulate environmental forces
        self.force_model.accumulate(
            &mut self.particles,
            &self.material,
            forces,
            time_seconds,
            turbulence,
        );

        // 2. Damped Verlet step
        integrate(&mut self.particles, self.material.damping, dt);
        let kinetic_energy = self.particles.kinetic_energy();

        // 3. Relax constraints
        let relaxation = self.relaxer.relax(&mut self.particles, &self.constraints);

        // 4. Publish to the render mesh
        self.sync_mesh();

        StepReport {
            relaxation,
            kinetic_energy,
            wall_time: start.elapsed().as_secs_f64(),
        }
    }

    /// Moves the pinned corners onto a support: each is lifted to `height`
    /// and shifted by `offset_x` along X. Free particles stay where they
    /// are and are pulled up by the constraints over the following steps.
    pub fn hang_corners(&mut self, offset_x: f32, height: f32) {
        let pinned: Vec<usize> = self.particles.pinned_indices().collect();
        for i in pinned {
            let p = self.particles.position[i];
            self.particles.place(i, Vec3::new(p.x + offset_x, height, p.z));
        }
        self.sync_mesh();
    }

    fn sync_mesh(&mut self) {
        self.mesh.write_positions(&self.particles.position);
        compute_vertex_normals(&mut self.mesh);
    }

    /// Current particle positions in grid order.
    pub fn positions(&self) -> &[Vec3] {
        &self.particles.position
    }

    /// Current positions as flattened `[x, y, z, ...]` in grid order.
    pub fn interleaved_positions(&self) -> Vec<f32> {
        self.mesh.interleaved_positions()
    }

    /// World positions of the top-left and top-right pinned corners.
    pub fn pinned_corners(&self) -> [Vec3; 2] {
        let [left, right] = self.layout.pinned_corners();
        [self.particles.position[left], self.particles.position[right]]
    }

    /// Render mesh, refreshed after every step.
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// The bound material.
    pub fn material(&self) -> &MaterialPreset {
        &self.material
    }

    /// Grid layout the cloth was built from.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Anchor the grid was offset by at creation.
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Particle buffers.
    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    /// Mutable particle buffers, for scripted displacement.
    pub fn particles_mut(&mut self) -> &mut ParticleStore {
        &mut self.particles
    }

    /// Constraint set.
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Display summary.
    pub fn info(&self) -> ClothInfo {
        ClothInfo {
            material: self.material.name.clone(),
            mass: self.material.mass,
            stiffness: self.material.stiffness,
            wind_resistance: self.material.wind_resistance,
            water_absorption: self.material.water_absorption,
            particle_count: self.particles.len(),
            structural_constraints: self.constraints.count_kind(ConstraintKind::Structural),
            shear_constraints: self.constraints.count_kind(ConstraintKind::Shear),
        }
    }
}
