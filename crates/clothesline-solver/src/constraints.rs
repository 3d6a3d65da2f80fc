//! Rest-length constraints built from the grid topology.

use serde::{Deserialize, Serialize};

use clothesline_mesh::grid::{DIAGONAL_OFFSETS, STRUCTURAL_OFFSETS};
use clothesline_mesh::GridLayout;

/// Which template offset produced a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// Axis-aligned link to an adjacent particle.
    Structural,
    /// Diagonal link resisting shear.
    Shear,
}

/// A pairwise distance constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// First particle index.
    pub a: u32,
    /// Second particle index.
    pub b: u32,
    /// Distance the pair is pulled toward.
    pub rest_length: f32,
    /// Template that produced this link.
    pub kind: ConstraintKind,
}

/// The ordered list of constraints for one cloth.
///
/// Every particle enqueues one constraint per offset whose flattened index is
/// in range, so each undirected pair is present twice (once from each
/// endpoint). Offsets that step past a side edge link to the adjacent row.
/// Order is row-major over particles, structural offsets before diagonal
/// ones; the relaxation sweep follows this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Builds the structural and shear constraints for `layout`.
    pub fn from_grid(layout: &GridLayout) -> Self {
        let structural = layout.spacing();
        let diagonal = layout.diagonal_spacing();
        let mut constraints = Vec::with_capacity(layout.particle_count() * 8);

        for y in 0..layout.rows() {
            for x in 0..layout.columns() {
                let a = layout.index(x, y) as u32;
                let templates = [
                    (&STRUCTURAL_OFFSETS, structural, ConstraintKind::Structural),
                    (&DIAGONAL_OFFSETS, diagonal, ConstraintKind::Shear),
                ];
                for (offsets, rest_length, kind) in templates {
                    for &(dx, dy) in offsets.iter() {
                        if let Some(b) = layout.neighbor(x, y, dx, dy) {
                            constraints.push(Constraint {
                                a,
                                b: b as u32,
                                rest_length,
                                kind,
                            });
                        }
                    }
                }
            }
        }

        Self { constraints }
    }

    /// Builds a set from explicit constraints, kept in the given order.
    pub fn from_constraints(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }

    /// Number of constraints.
    #[inline]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if there are no constraints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Constraints in sweep order.
    #[inline]
    pub fn as_slice(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Iterates over constraints in sweep order.
    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    /// Number of constraints of the given kind.
    pub fn count_kind(&self, kind: ConstraintKind) -> usize {
        self.constraints.iter().filter(|c| c.kind == kind).count()
    }

    /// Sum over all constraints of `(|p_b - p_a| - rest_length)²`.
    pub fn squared_error(&self, positions: &[glam::Vec3]) -> f64 {
        self.constraints
            .iter()
            .map(|c| {
                let d = positions[c.b as usize].distance(positions[c.a as usize]);
                let e = (d - c.rest_length) as f64;
                e * e
            })
            .sum()
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
