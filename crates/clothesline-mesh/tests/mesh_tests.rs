//! Integration tests for clothesline-mesh.

use glam::Vec3;

use clothesline_mesh::generators::cloth_grid;
use clothesline_mesh::grid::{DIAGONAL_OFFSETS, STRUCTURAL_OFFSETS};
use clothesline_mesh::normals::compute_vertex_normals;
use clothesline_mesh::{GridLayout, TriangleMesh};

fn square(segments: u32) -> GridLayout {
    GridLayout::new(2.0, 2.0, segments, segments).unwrap()
}

// ─── GridLayout Tests ─────────────────────────────────────────

#[test]
fn layout_rejects_zero_segments() {
    assert!(GridLayout::new(5.0, 5.0, 0, 4).is_err());
    assert!(GridLayout::new(5.0, 5.0, 4, 0).is_err());
}

#[test]
fn layout_rejects_non_positive_size() {
    assert!(GridLayout::new(0.0, 5.0, 4, 4).is_err());
    assert!(GridLayout::new(5.0, -1.0, 4, 4).is_err());
    assert!(GridLayout::new(f32::NAN, 5.0, 4, 4).is_err());
}

#[test]
fn layout_counts() {
    let layout = GridLayout::new(5.0, 5.0, 20, 10).unwrap();
    assert_eq!(layout.columns(), 21);
    assert_eq!(layout.rows(), 11);
    assert_eq!(layout.particle_count(), 231);
}

#[test]
fn index_and_coords_agree() {
    let layout = GridLayout::new(3.0, 2.0, 3, 2).unwrap();
    for i in 0..layout.particle_count() {
        let (x, y) = layout.coords(i);
        assert_eq!(layout.index(x, y), i);
    }
    assert_eq!(layout.index(2, 1), 6);
}

#[test]
fn spacing_uses_x_division_for_both_axes() {
    let layout = GridLayout::new(4.0, 10.0, 4, 2).unwrap();
    assert_eq!(layout.spacing(), 1.0);
    assert!((layout.diagonal_spacing() - std::f32::consts::SQRT_2).abs() < 1e-6);
}

#[test]
fn neighbors_outside_index_range_are_skipped() {
    let layout = square(2);
    assert_eq!(layout.neighbor(0, 0, 0, -1), None);
    assert_eq!(layout.neighbor(0, 0, -1, 0), None);
    assert_eq!(layout.neighbor(2, 2, 1, 1), None);
    assert_eq!(layout.neighbor(2, 2, 0, 1), None);
    assert_eq!(layout.neighbor(1, 1, 1, 1), Some(8));
    assert_eq!(layout.neighbor(1, 1, -1, -1), Some(0));
}

#[test]
fn side_edges_wrap_onto_adjacent_rows() {
    let layout = square(2);
    // Left of (0, 1) is the last column of row 0.
    assert_eq!(layout.neighbor(0, 1, -1, 0), Some(2));
    // Right of (2, 0) is the first column of row 1.
    assert_eq!(layout.neighbor(2, 0, 1, 0), Some(3));
    assert_eq!(layout.neighbor(2, 0, 1, 1), Some(6));
    assert_eq!(layout.neighbor(0, 2, -1, -1), Some(2));
}

#[test]
fn bottom_left_corner_reaches_four_indices() {
    let layout = square(2);
    let found: Vec<usize> = STRUCTURAL_OFFSETS
        .iter()
        .chain(DIAGONAL_OFFSETS.iter())
        .filter_map(|(dx, dy)| layout.neighbor(0, 0, *dx, *dy))
        .collect();
    assert_eq!(found, vec![1, 3, 4, 2]);
}

#[test]
fn pinned_corners_are_top_row_ends() {
    let layout = GridLayout::new(5.0, 5.0, 4, 3).unwrap();
    assert_eq!(layout.pinned_corners(), [15, 19]);
    assert!(layout.is_pinned_corner(0, 3));
    assert!(layout.is_pinned_corner(4, 3));
    assert!(!layout.is_pinned_corner(2, 3));
    assert!(!layout.is_pinned_corner(0, 0));
}

#[test]
fn local_positions_span_the_cloth() {
    let layout = GridLayout::new(5.0, 4.0, 5, 4).unwrap();
    assert_eq!(layout.local_position(0, 0), Vec3::new(-2.5, 0.0, 0.0));
    assert_eq!(layout.local_position(5, 4), Vec3::new(2.5, 4.0, 0.0));
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn cloth_grid_counts() {
    let layout = GridLayout::new(5.0, 5.0, 4, 3).unwrap();
    let mesh = cloth_grid(&layout, Vec3::ZERO);
    assert_eq!(mesh.vertex_count(), 20);
    assert_eq!(mesh.triangle_count(), 24);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
}

#[test]
fn cloth_grid_applies_anchor() {
    let layout = square(2);
    let anchor = Vec3::new(-20.0, 1.0, 3.0);
    let mesh = cloth_grid(&layout, anchor);
    assert_eq!(mesh.position(0), Vec3::new(-21.0, 1.0, 3.0));
    assert_eq!(mesh.position(8), Vec3::new(-19.0, 3.0, 3.0));
}

#[test]
fn cloth_grid_faces_positive_z() {
    let layout = square(3);
    let mut mesh = cloth_grid(&layout, Vec3::ZERO);
    compute_vertex_normals(&mut mesh);
    for i in 0..mesh.vertex_count() {
        let n = mesh.normal(i);
        assert!((n - Vec3::Z).length() < 1e-6, "vertex {i} normal {n:?}");
    }
}

// ─── TriangleMesh Tests ───────────────────────────────────────

#[test]
fn interleaved_positions_follow_grid_order() {
    let layout = square(1);
    let mesh = cloth_grid(&layout, Vec3::ZERO);
    let flat = mesh.interleaved_positions();
    assert_eq!(flat.len(), 12);
    assert_eq!(&flat[0..3], &[-1.0, 0.0, 0.0]);
    assert_eq!(&flat[9..12], &[1.0, 2.0, 0.0]);
}

#[test]
fn write_positions_updates_channels() {
    let layout = square(1);
    let mut mesh = cloth_grid(&layout, Vec3::ZERO);
    let moved: Vec<Vec3> = (0..4).map(|i| Vec3::splat(i as f32)).collect();
    mesh.write_positions(&moved);
    assert_eq!(mesh.position(3), Vec3::splat(3.0));
}

#[test]
fn normals_follow_a_tilted_cloth() {
    let layout = square(2);
    let mut mesh = cloth_grid(&layout, Vec3::ZERO);
    // Rotate the sheet so it lies in the XZ plane (Y mapped to -Z).
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i);
        mesh.set_position(i, Vec3::new(p.x, 0.0, -p.y));
    }
    compute_vertex_normals(&mut mesh);
    assert!((mesh.normal(4) - Vec3::Y).length() < 1e-6);
}

#[test]
fn mesh_is_serializable() {
    let mesh = cloth_grid(&square(1), Vec3::ZERO);
    let json = serde_json::to_string(&mesh).unwrap();
    let back: TriangleMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(back.vertex_count(), 4);
    assert_eq!(back.indices, mesh.indices);
}
