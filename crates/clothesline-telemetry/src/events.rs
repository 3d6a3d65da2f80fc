//! Scene event types.
//!
//! Events are small value types tagged with the frame they happened in.

use serde::{Deserialize, Serialize};

use clothesline_types::ClothId;

/// An event emitted by the clothesline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEvent {
    /// Frame counter of the scene when the event was emitted (0-indexed).
    pub frame: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventKind {
    /// A cloth was created and hung.
    ClothAdded {
        cloth: ClothId,
        material: String,
        /// Slot index on the line.
        slot: usize,
    },

    /// A cloth was taken down and its buffers released.
    ClothRemoved {
        cloth: ClothId,
        slot: usize,
    },

    /// Creation was declined because every slot is taken.
    PlacementDeclined {
        material: String,
        capacity: usize,
    },

    /// One cloth finished a simulation step.
    StepCompleted {
        cloth: ClothId,
        /// Step length after time scaling (seconds).
        dt: f32,
        /// Squared constraint error left after relaxation.
        relaxation_error: f64,
        /// Kinetic energy of the free particles.
        kinetic_energy: f64,
        /// Wall-clock time for the step (seconds).
        wall_time: f64,
    },
}

impl SceneEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u64, kind: EventKind) -> Self {
        Self { frame, kind }
    }

    /// Short label for log lines.
    pub fn label(&self) -> &'static str {
        match self.kind {
            EventKind::ClothAdded { .. } => "cloth_added",
            EventKind::ClothRemoved { .. } => "cloth_removed",
            EventKind::PlacementDeclined { .. } => "placement_declined",
            EventKind::StepCompleted { .. } => "step_completed",
        }
    }
}
