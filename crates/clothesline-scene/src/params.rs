//! Scene parameters read by the frame driver.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use clothesline_types::constants;
use clothesline_types::{ClothError, ClothResult};

/// Environment and pacing controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    /// Multiplier on `wind_direction`.
    pub wind_strength: f32,
    /// Wind direction; not normalized.
    pub wind_direction: Vec3,
    /// Downward rain acceleration.
    pub rain_intensity: f32,
    /// Real seconds are multiplied by this to get the step length.
    pub time_scale: f32,
    /// Preset used by [`Clothesline::hang_selected`](crate::Clothesline::hang_selected).
    pub selected_material: String,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            wind_strength: 10.0,
            wind_direction: Vec3::new(1.0, 1.0, 0.0),
            rain_intensity: 5.0,
            time_scale: constants::TIME_SCALE,
            selected_material: "Silk".into(),
        }
    }
}

impl SceneParams {
    /// `wind_strength · wind_direction`.
    pub fn wind_vector(&self) -> Vec3 {
        self.wind_direction * self.wind_strength
    }

    /// `(0, -rain_intensity, 0)`.
    pub fn rain_vector(&self) -> Vec3 {
        Vec3::new(0.0, -self.rain_intensity, 0.0)
    }

    /// Step length for `elapsed` real seconds.
    #[inline]
    pub fn scaled_dt(&self, elapsed: f64) -> f32 {
        (elapsed * self.time_scale as f64) as f32
    }

    pub fn validate(&self) -> ClothResult<()> {
        if !(self.wind_strength.is_finite()
            && self.wind_direction.is_finite()
            && self.rain_intensity.is_finite())
        {
            return Err(ClothError::InvalidConfig(
                "wind and rain parameters must be finite".into(),
            ));
        }
        if !(self.time_scale.is_finite() && self.time_scale > 0.0) {
            return Err(ClothError::InvalidConfig(format!(
                "time_scale must be > 0 (got {})",
                self.time_scale
            )));
        }
        Ok(())
    }
}
