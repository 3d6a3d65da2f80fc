//! Geometry of the rod and of the cloths hung on it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use clothesline_mesh::GridLayout;
use clothesline_types::{ClothError, ClothResult};

/// Rod dimensions and the shape of every cloth hung by [`hang`].
///
/// [`hang`]: crate::Clothesline::hang
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineLayout {
    /// Length of the rod.
    pub rod_length: f32,
    /// Height of the rod; pinned corners are lifted to it.
    pub rod_height: f32,
    /// X offset between consecutive slots.
    pub slot_spacing: f32,
    /// Cloth width.
    pub cloth_width: f32,
    /// Cloth height.
    pub cloth_height: f32,
    /// Grid cells along X.
    pub segments_x: u32,
    /// Grid cells along Y.
    pub segments_y: u32,
    /// Where new cloths are built before being hung.
    pub spawn_origin: Vec3,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            rod_length: 40.0,
            rod_height: 15.0,
            slot_spacing: 2.0,
            cloth_width: 5.0,
            cloth_height: 5.0,
            segments_x: 20,
            segments_y: 20,
            spawn_origin: Vec3::new(-20.0, 0.0, 0.0),
        }
    }
}

impl LineLayout {
    /// Number of slots on the rod.
    ///
    /// `floor(rod_length / cloth_width) + slot_spacing + 1`, which is 11 for
    /// the default layout.
    pub fn capacity(&self) -> usize {
        let fitted = (self.rod_length / self.cloth_width).floor().max(0.0) as usize;
        fitted + self.slot_spacing.floor().max(0.0) as usize + 1
    }

    /// X shift applied to the pinned corners of a cloth in `slot`.
    #[inline]
    pub fn slot_offset(&self, slot: usize) -> f32 {
        slot as f32 * self.slot_spacing
    }

    /// Grid for one hung cloth.
    pub fn grid(&self) -> ClothResult<GridLayout> {
        GridLayout::new(
            self.cloth_width,
            self.cloth_height,
            self.segments_x,
            self.segments_y,
        )
    }

    /// Checks the layout can produce at least one slot and a valid grid.
    pub fn validate(&self) -> ClothResult<()> {
        for (name, value) in [
            ("rod_length", self.rod_length),
            ("rod_height", self.rod_height),
            ("slot_spacing", self.slot_spacing),
        ] {
            if !value.is_finite() {
                return Err(ClothError::InvalidConfig(format!("{name} must be finite")));
            }
        }
        if self.rod_length <= 0.0 {
            return Err(ClothError::InvalidConfig(format!(
                "rod_length must be > 0 (got {})",
                self.rod_length
            )));
        }
        if self.slot_spacing < 0.0 {
            return Err(ClothError::InvalidConfig(format!(
                "slot_spacing must be >= 0 (got {})",
                self.slot_spacing
            )));
        }
        if !self.spawn_origin.is_finite() {
            return Err(ClothError::InvalidConfig("spawn_origin must be finite".into()));
        }
        self.grid().map(|_| ())
    }
}
