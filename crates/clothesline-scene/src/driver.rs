//! Frame driver: turns real elapsed time into one step per cloth.

use serde::{Deserialize, Serialize};

use clothesline_solver::{StepForces, StepReport};
use clothesline_types::ClothId;

use crate::line::Clothesline;
use crate::params::SceneParams;

/// Outcome of one [`FrameDriver::advance`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameReport {
    /// Frame number (0-indexed).
    pub frame: u64,
    /// Step length handed to the solver.
    pub dt: f32,
    /// Per-cloth results, in slot order.
    pub steps: Vec<(ClothId, StepReport)>,
}

impl FrameReport {
    /// Largest relaxation error left across all cloths.
    pub fn max_relaxation_error(&self) -> f64 {
        self.steps
            .iter()
            .map(|(_, r)| r.relaxation.final_error)
            .fold(0.0, f64::max)
    }
}

/// Drives a [`Clothesline`] from [`SceneParams`].
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    params: SceneParams,
    frames: u64,
}

impl FrameDriver {
    pub fn new(params: SceneParams) -> Self {
        Self { params, frames: 0 }
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    /// Parameters are read fresh on every frame.
    pub fn params_mut(&mut self) -> &mut SceneParams {
        &mut self.params
    }

    /// Frames advanced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances every cloth by `elapsed` real seconds scaled by
    /// `time_scale`. The line's clock is ticked by the unscaled time.
    pub fn advance(&mut self, line: &mut Clothesline, elapsed: f64) -> FrameReport {
        let dt = self.params.scaled_dt(elapsed);
        line.tick_clock(elapsed);

        let forces = StepForces::new(self.params.wind_vector(), self.params.rain_vector());
        let steps = line.simulate_all(&forces, dt);

        let report = FrameReport {
            frame: self.frames,
            dt,
            steps,
        };
        self.frames += 1;
        report
    }
}
