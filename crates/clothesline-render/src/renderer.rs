//! Renderer trait and HeadlessRenderer.
//!
//! A renderer sees the line once at `init` to learn each cloth's topology,
//! then one [`RenderFrame`] per simulated frame.

use serde::{Deserialize, Serialize};

use clothesline_scene::Clothesline;
use clothesline_types::{ClothId, ClothResult};

/// Static description of one cloth: everything except positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothTopology {
    pub cloth: ClothId,
    pub slot: usize,
    pub material: String,
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Triangle indices (3 per triangle).
    pub indices: Vec<u32>,
}

impl ClothTopology {
    /// Topology of every cloth on `line`, in slot order.
    pub fn collect(line: &Clothesline) -> Vec<Self> {
        line.iter()
            .map(|(cloth, slot, c)| Self {
                cloth,
                slot,
                material: c.material().name.clone(),
                vertex_count: c.mesh().vertex_count(),
                triangle_count: c.mesh().triangle_count(),
                indices: c.mesh().indices.clone(),
            })
            .collect()
    }
}

/// Positions of one cloth in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothFrame {
    pub cloth: ClothId,
    /// Interleaved `[x0, y0, z0, x1, y1, z1, ...]` in grid order.
    pub positions: Vec<f32>,
}

/// Snapshot of every cloth on the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Frame index.
    pub frame: u64,
    /// Clock reading when captured (seconds).
    pub time: f64,
    pub cloths: Vec<ClothFrame>,
}

impl RenderFrame {
    /// Copies the current positions of every cloth on `line`.
    pub fn capture(frame: u64, line: &Clothesline) -> Self {
        Self {
            frame,
            time: line.time_seconds(),
            cloths: line
                .iter()
                .map(|(cloth, _, c)| ClothFrame {
                    cloth,
                    positions: c.interleaved_positions(),
                })
                .collect(),
        }
    }
}

/// Trait for consuming simulation output.
pub trait Renderer: Send {
    /// Records the topology of the cloths on the line.
    fn init(&mut self, line: &Clothesline) -> ClothResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame) -> ClothResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> ClothResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Discards all frames.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _line: &Clothesline) -> ClothResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame) -> ClothResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> ClothResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
