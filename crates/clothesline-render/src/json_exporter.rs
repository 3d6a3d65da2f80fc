//! JSON frame exporter: writes per-frame positions for offline playback.
//!
//! Topology is captured once at `init`; each submitted frame stores only
//! positions. The whole animation is serialized on `finalize()`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use clothesline_scene::Clothesline;
use clothesline_types::{ClothError, ClothResult};

use crate::renderer::{ClothTopology, RenderFrame, Renderer};

/// Complete animation as written to disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationData {
    pub cloths: Vec<ClothTopology>,
    pub frames: Vec<RenderFrame>,
}

/// Exports frames to a JSON file.
///
/// ```text
/// let mut exporter = JsonFrameExporter::new("frames.json");
/// exporter.init(&line)?;
/// // ... advance the line, calling submit_frame() each frame ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
#[derive(Debug)]
pub struct JsonFrameExporter {
    output_path: PathBuf,
    data: AnimationData,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: impl AsRef<Path>) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
            data: AnimationData::default(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Everything captured so far.
    pub fn data(&self) -> &AnimationData {
        &self.data
    }

    /// Serializes the captured animation.
    pub fn to_json(&self) -> ClothResult<String> {
        serde_json::to_string(&self.data)
            .map_err(|e| ClothError::Serialization(format!("JSON serialization failed: {e}")))
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, line: &Clothesline) -> ClothResult<()> {
        self.data.cloths = ClothTopology::collect(line);
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> ClothResult<()> {
        self.data.frames.push(frame.clone());
        Ok(())
    }

    fn finalize(&mut self) -> ClothResult<()> {
        let json = self.to_json()?;
        std::fs::write(&self.output_path, json)?;
        tracing::info!(
            path = %self.output_path.display(),
            frames = self.data.frames.len(),
            cloths = self.data.cloths.len(),
            "frames exported"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.data.frames.len() as u32
    }
}
