//! Vertex normal computation from triangle mesh data.
//!
//! Computes area-weighted vertex normals by accumulating
//! face normals from each adjacent triangle.

use crate::mesh::TriangleMesh;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Called after every step once the new positions are copied in.
/// Vertices with no non-degenerate triangle keep a zero normal.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh) {
    let n = mesh.vertex_count();

    mesh.normal_x.iter_mut().for_each(|v| *v = 0.0);
    mesh.normal_y.iter_mut().for_each(|v| *v = 0.0);
    mesh.normal_z.iter_mut().for_each(|v| *v = 0.0);

    for t in 0..mesh.triangle_count() {
        let [ia, ib, ic] = mesh.triangle(t);
        let (a, b, c) = (ia as usize, ib as usize, ic as usize);

        let pa = mesh.position(a);
        // Cross product magnitude = 2 × triangle area
        let face = (mesh.position(b) - pa).cross(mesh.position(c) - pa);

        for v in [a, b, c] {
            mesh.normal_x[v] += face.x;
            mesh.normal_y[v] += face.y;
            mesh.normal_z[v] += face.z;
        }
    }

    for i in 0..n {
        let normal = mesh.normal(i);
        let len = normal.length();
        if len > 1e-10 {
            let unit = normal / len;
            mesh.normal_x[i] = unit.x;
            mesh.normal_y[i] = unit.y;
            mesh.normal_z[i] = unit.z;
        }
    }
}
