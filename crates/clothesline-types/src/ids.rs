//! Strongly-typed identifiers.
//!
//! Cloth handles are a newtype so they cannot be mixed up with slot or
//! particle indices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to a cloth hung on the line. Never reused within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClothId(pub u32);

impl From<u32> for ClothId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl fmt::Display for ClothId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cloth#{}", self.0)
    }
}
