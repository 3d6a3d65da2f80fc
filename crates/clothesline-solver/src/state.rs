//! Particle store: SoA buffers for all per-particle data.
//!
//! This is the primary mutable data structure during simulation.
//! Forces, the integrator, and the constraint solver all read and write
//! these buffers in place.

use glam::Vec3;

use clothesline_mesh::GridLayout;
use clothesline_types::{ClothError, ClothResult};

/// SoA particle buffers for one cloth.
///
/// All arrays have length `len()`, indexed in grid order
/// (`y * (segments_x + 1) + x`).
#[derive(Debug, Clone)]
pub struct ParticleStore {
    /// Current positions.
    pub position: Vec<Vec3>,
    /// Positions before the last integration step.
    pub previous: Vec<Vec3>,
    /// Damped implicit velocity from the last integration step.
    pub velocity: Vec<Vec3>,
    /// Per-step force accumulator, cleared after integration.
    pub acceleration: Vec<Vec3>,
    /// Per-particle mass, copied from the material.
    pub mass: Vec<f32>,

    // Fixed at creation.
    original: Vec<Vec3>,
    pinned: Vec<bool>,
}

impl ParticleStore {
    /// Lays out particles on `layout`, offset by `anchor`, and pins the two
    /// top corners.
    pub fn from_grid(layout: &GridLayout, anchor: Vec3, mass: f32) -> Self {
        let n = layout.particle_count();
        let mut positions = Vec::with_capacity(n);
        let mut pinned = Vec::with_capacity(n);

        for y in 0..layout.rows() {
            for x in 0..layout.columns() {
                positions.push(layout.local_position(x, y) + anchor);
                pinned.push(layout.is_pinned_corner(x, y));
            }
        }

        Self::build(positions, mass, pinned)
    }

    /// Builds a store from explicit positions and pin flags.
    ///
    /// Useful for free particles and small hand-made meshes.
    pub fn from_positions(positions: Vec<Vec3>, mass: f32, pinned: Vec<bool>) -> ClothResult<Self> {
        if pinned.len() != positions.len() {
            return Err(ClothError::InvalidGrid(format!(
                "Pinned array length ({}) != particle count ({})",
                pinned.len(),
                positions.len()
            )));
        }
        Ok(Self::build(positions, mass, pinned))
    }

    fn build(positions: Vec<Vec3>, mass: f32, pinned: Vec<bool>) -> Self {
        let n = positions.len();
        Self {
            previous: positions.clone(),
            original: positions.clone(),
            position: positions,
            velocity: vec![Vec3::ZERO; n],
            acceleration: vec![Vec3::ZERO; n],
            mass: vec![mass; n],
            pinned,
        }
    }

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.position.len()
    }

    /// Returns true if the store holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Whether particle `i` is pinned.
    #[inline]
    pub fn is_pinned(&self, i: usize) -> bool {
        self.pinned[i]
    }

    /// Indices of all pinned particles, ascending.
    pub fn pinned_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.pinned
            .iter()
            .enumerate()
            .filter_map(|(i, &p)| p.then_some(i))
    }

    /// Undeformed position of particle `i` at creation.
    #[inline]
    pub fn original(&self, i: usize) -> Vec3 {
        self.original[i]
    }

    /// Moves particle `i` without introducing velocity: both `position` and
    /// `previous` are set.
    pub fn place(&mut self, i: usize, p: Vec3) {
        self.position[i] = p;
        self.previous[i] = p;
    }

    /// Zeroes every acceleration accumulator.
    pub fn clear_accelerations(&mut self) {
        self.acceleration.fill(Vec3::ZERO);
    }

    /// Total kinetic energy `0.5 * Σ m_i * |v_i|²` of the free particles,
    /// using the per-step displacement velocity.
    pub fn kinetic_energy(&self) -> f64 {
        (0..self.len())
            .filter(|&i| !self.pinned[i])
            .map(|i| 0.5 * self.mass[i] as f64 * self.velocity[i].length_squared() as f64)
            .sum()
    }

    /// Largest distance any particle has travelled from its original
    /// position.
    pub fn max_displacement(&self) -> f32 {
        self.position
            .iter()
            .zip(&self.original)
            .map(|(p, o)| p.distance(*o))
            .fold(0.0, f32::max)
    }
}
