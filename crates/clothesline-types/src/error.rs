//! Error types for the clothesline solver.
//!
//! The numeric core never fails; these cover construction, lookup,
//! capacity, and the configuration surface.

use thiserror::Error;

/// Unified error type for the clothesline crates.
#[derive(Debug, Error)]
pub enum ClothError {
    /// Grid dimensions cannot produce a cloth.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// No preset with this name exists in the catalog.
    #[error("Unknown material '{name}' (available: {available})")]
    UnknownMaterial {
        name: String,
        available: String,
    },

    /// Every slot on the line is taken; creation was declined.
    #[error("Exhausted space on the clothesline ({capacity} slots)")]
    LineFull {
        capacity: usize,
    },

    /// The handle does not refer to a live cloth.
    #[error("No cloth with id {0}")]
    UnknownCloth(u32),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ClothError {
    /// Returns true for a declined placement, which callers report to the
    /// user instead of treating as a fault.
    pub fn is_declined(&self) -> bool {
        matches!(self, ClothError::LineFull { .. })
    }
}

/// Convenience alias for `Result<T, ClothError>`.
pub type ClothResult<T> = Result<T, ClothError>;
