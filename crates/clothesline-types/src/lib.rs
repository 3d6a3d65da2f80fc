//! # clothesline-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the clothesline cloth solver.
//!
//! No domain logic lives here; this is the vocabulary the other
//! clothesline crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{ClothError, ClothResult};
pub use ids::ClothId;
