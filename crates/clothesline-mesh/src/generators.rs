//! Cloth grid mesh generator.
//!
//! Produces the render mesh for a [`GridLayout`] with vertices in the same
//! order as the solver's particles, so positions can be copied across
//! index-for-index.

use glam::Vec3;

use crate::grid::GridLayout;
use crate::mesh::TriangleMesh;

/// Generates a flat cloth in the XY plane, offset by `anchor`.
///
/// Vertex `(x, y)` sits at `layout.local_position(x, y) + anchor`, facing
/// +Z. Each grid cell is split into two counter-clockwise triangles.
///
/// # Example
/// ```
/// use clothesline_mesh::{generators::cloth_grid, GridLayout};
/// let layout = GridLayout::new(2.0, 2.0, 2, 2).unwrap();
/// let mesh = cloth_grid(&layout, glam::Vec3::ZERO);
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn cloth_grid(layout: &GridLayout, anchor: Vec3) -> TriangleMesh {
    let cols = layout.segments_x as usize;
    let rows = layout.segments_y as usize;
    let mut mesh = TriangleMesh::with_capacity(layout.particle_count(), cols * rows * 2);

    for y in 0..layout.rows() {
        for x in 0..layout.columns() {
            let p = layout.local_position(x, y) + anchor;
            mesh.pos_x.push(p.x);
            mesh.pos_y.push(p.y);
            mesh.pos_z.push(p.z);

            mesh.normal_x.push(0.0);
            mesh.normal_y.push(0.0);
            mesh.normal_z.push(1.0);

            let (u, v) = layout.uv(x, y);
            mesh.uv_u.push(u);
            mesh.uv_v.push(v);
        }
    }

    for y in 0..rows {
        for x in 0..cols {
            let bot_left = layout.index(x, y) as u32;
            let bot_right = bot_left + 1;
            let top_left = layout.index(x, y + 1) as u32;
            let top_right = top_left + 1;

            mesh.indices.extend_from_slice(&[bot_left, bot_right, top_left]);
            mesh.indices.extend_from_slice(&[bot_right, top_right, top_left]);
        }
    }

    mesh
}
