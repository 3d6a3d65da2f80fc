//! # clothesline-material
//!
//! Material presets and the catalog they are looked up from.
//!
//! A [`MaterialPreset`] scales the per-step forces a cloth receives (wind
//! resistance, water absorption) and the damping of its integrator. The
//! [`MaterialCatalog`] holds the named presets (Silk, Cotton, and Denim by
//! default) and accepts custom registrations at runtime.

pub mod catalog;
pub mod properties;

pub use catalog::MaterialCatalog;
pub use properties::MaterialPreset;
