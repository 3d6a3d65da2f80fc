//! # clothesline-mesh
//!
//! Grid topology and render-side mesh data for a cloth, stored in
//! Structure-of-Arrays (SoA) layout.
//!
//! ## Key Types
//!
//! - [`GridLayout`]: Cloth dimensions and the index arithmetic every other
//!   crate uses to address particles.
//! - [`TriangleMesh`]: Positions, normals, UVs, and triangle indices that a
//!   renderer copies into its vertex buffers each frame.
//! - Generators and normal recomputation for the flat cloth grid.

pub mod generators;
pub mod grid;
pub mod mesh;
pub mod normals;

pub use grid::GridLayout;
pub use mesh::TriangleMesh;
