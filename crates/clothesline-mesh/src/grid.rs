//! Grid layout and index arithmetic.
//!
//! Particles are stored row-major from the bottom row up:
//! `index = y * (segments_x + 1) + x`. The top row (`y == segments_y`)
//! carries the two pinned corners.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use clothesline_types::{ClothError, ClothResult};

/// Structural neighbor offsets `(dx, dy)`, axis-aligned.
pub const STRUCTURAL_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Shear neighbor offsets `(dx, dy)`, diagonal.
pub const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Dimensions and subdivision of a rectangular cloth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Total width along X.
    pub width: f32,
    /// Total height along Y.
    pub height: f32,
    /// Number of cells along X (particle columns = segments_x + 1).
    pub segments_x: u32,
    /// Number of cells along Y (particle rows = segments_y + 1).
    pub segments_y: u32,
}

impl GridLayout {
    /// Creates a layout, rejecting empty subdivisions and non-positive sizes.
    pub fn new(width: f32, height: f32, segments_x: u32, segments_y: u32) -> ClothResult<Self> {
        if segments_x == 0 || segments_y == 0 {
            return Err(ClothError::InvalidGrid(format!(
                "segment counts must be at least 1 (got {segments_x}x{segments_y})"
            )));
        }
        if !(width > 0.0 && width.is_finite()) || !(height > 0.0 && height.is_finite()) {
            return Err(ClothError::InvalidGrid(format!(
                "cloth size must be positive and finite (got {width}x{height})"
            )));
        }
        Ok(Self {
            width,
            height,
            segments_x,
            segments_y,
        })
    }

    /// Number of particle columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.segments_x as usize + 1
    }

    /// Number of particle rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.segments_y as usize + 1
    }

    /// Total particle count: `(segments_x + 1) * (segments_y + 1)`.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Flattened index of grid node `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.columns() + x
    }

    /// Grid coordinates of a flattened index.
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.columns(), index / self.columns())
    }

    /// Rest length of a structural link.
    ///
    /// Both axes use the X division, so the vertical rest length is only
    /// exact when `width / segments_x == height / segments_y`.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.width / self.segments_x as f32
    }

    /// Rest length of a shear (diagonal) link.
    #[inline]
    pub fn diagonal_spacing(&self) -> f32 {
        std::f32::consts::SQRT_2 * self.spacing()
    }

    /// Flattened index of the neighbor at offset `(dx, dy)` from `(x, y)`, or
    /// `None` when that index falls outside `[0, particle_count)`.
    ///
    /// Only the flattened index is bounds-checked, so a horizontal offset past
    /// either side edge lands on the adjacent row.
    pub fn neighbor(&self, x: usize, y: usize, dx: i32, dy: i32) -> Option<usize> {
        let columns = self.columns() as i64;
        let flat = (y as i64 + dy as i64) * columns + x as i64 + dx as i64;
        usize::try_from(flat)
            .ok()
            .filter(|&b| b < self.particle_count())
    }

    /// True for the two top corners of the grid.
    #[inline]
    pub fn is_pinned_corner(&self, x: usize, y: usize) -> bool {
        y == self.segments_y as usize && (x == 0 || x == self.segments_x as usize)
    }

    /// Indices of the top-left and top-right corners.
    pub fn pinned_corners(&self) -> [usize; 2] {
        let top = self.segments_y as usize;
        [self.index(0, top), self.index(self.segments_x as usize, top)]
    }

    /// Undeformed local position of node `(x, y)`, centered along X with the
    /// bottom edge at `y = 0`.
    pub fn local_position(&self, x: usize, y: usize) -> Vec3 {
        let u = x as f32 / self.segments_x as f32;
        let v = y as f32 / self.segments_y as f32;
        Vec3::new((u - 0.5) * self.width, v * self.height, 0.0)
    }

    /// Texture coordinate of node `(x, y)`.
    pub fn uv(&self, x: usize, y: usize) -> (f32, f32) {
        (
            x as f32 / self.segments_x as f32,
            y as f32 / self.segments_y as f32,
        )
    }
}
