//! # clothesline-render
//!
//! Output side of a run: a `Renderer` trait, a `HeadlessRenderer` that
//! only counts frames, and a `JsonFrameExporter` that writes every frame's
//! positions to a JSON file for offline playback.

pub mod json_exporter;
pub mod renderer;

pub use json_exporter::{AnimationData, JsonFrameExporter};
pub use renderer::{ClothFrame, ClothTopology, HeadlessRenderer, RenderFrame, Renderer};
