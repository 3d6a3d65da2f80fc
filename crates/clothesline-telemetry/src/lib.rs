//! # clothesline-telemetry
//!
//! Event bus for scene telemetry. The clothesline emits structured events
//! (placements, removals, declined placements, per-step reports) that are
//! consumed by pluggable sinks: `tracing`, an in-memory buffer, or a
//! JSON-lines stream.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SceneEvent};
pub use sinks::{EventSink, JsonLinesSink, TracingSink, VecSink};
