//! Small hand-built meshes shared by the repair driver's tests, grounded on
//! the teacher's `src/test_utils.rs` and `src/tests.rs` fixture helpers.

use glam::vec3;

use crate::mesh::{FaceId, SMesh, VertexId};

pub fn add_triangle(mesh: &mut SMesh) -> (VertexId, VertexId, VertexId, FaceId) {
    let v0 = mesh.add_vertex(vec3(0.0, 0.0, 0.0));
    let v1 = mesh.add_vertex(vec3(1.0, 0.0, 0.0));
    let v2 = mesh.add_vertex(vec3(0.0, 1.0, 0.0));
    let f0 = mesh.add_triangle(v0, v1, v2).unwrap();
    (v0, v1, v2, f0)
}

pub fn add_quad(mesh: &mut SMesh) -> (VertexId, VertexId, VertexId, VertexId, FaceId) {
    let v0 = mesh.add_vertex(vec3(0.0, 0.0, 0.0));
    let v1 = mesh.add_vertex(vec3(1.0, 0.0, 0.0));
    let v2 = mesh.add_vertex(vec3(1.0, 1.0, 0.0));
    let v3 = mesh.add_vertex(vec3(0.0, 1.0, 0.0));
    let f0 = mesh.add_face(vec![v0, v1, v2, v3]).unwrap();
    (v0, v1, v2, v3, f0)
}

/// A one-ring of six triangles around a single interior vertex, used by the
/// teacher to exercise vertex deletion; reused here to exercise collapse.
pub fn vertex_onering() -> SMesh {
    let mut mesh = SMesh::new();
    let v0 = mesh.add_vertex(vec3(0.4499998093, 0.5196152329, 0.0));
    let v1 = mesh.add_vertex(vec3(0.2999998033, 0.5196152329, 0.0));
    let v2 = mesh.add_vertex(vec3(0.5249998569, 0.3897114396, 0.0));
    let v3 = mesh.add_vertex(vec3(0.3749998510, 0.3897114396, 0.0));
    let v4 = mesh.add_vertex(vec3(0.2249998450, 0.3897114396, 0.0));
    let v5 = mesh.add_vertex(vec3(0.4499999285, 0.2598076165, 0.0));
    let v6 = mesh.add_vertex(vec3(0.2999999225, 0.2598076165, 0.0));

    mesh.add_triangle(v3, v0, v1).unwrap();
    mesh.add_triangle(v3, v2, v0).unwrap();
    mesh.add_triangle(v4, v3, v1).unwrap();
    mesh.add_triangle(v5, v2, v3).unwrap();
    mesh.add_triangle(v6, v5, v3).unwrap();
    mesh.add_triangle(v6, v3, v4).unwrap();
    mesh
}

/// A thin kite: two outer apexes `v0`, `v1` a unit apart, connected through
/// a pair of near-coincident inner vertices `v2`, `v3` sharing a
/// near-degenerate edge. Both triangles are needles on edge (v2, v3)
/// (§8 scenario 1).
pub fn needle_bowtie(apex_offset: f32) -> SMesh {
    let mut mesh = SMesh::new();
    let v0 = mesh.add_vertex(vec3(0.0, 0.0, 0.0));
    let v1 = mesh.add_vertex(vec3(1.0, 0.0, 0.0));
    let v2 = mesh.add_vertex(vec3(0.5, apex_offset, 0.0));
    let v3 = mesh.add_vertex(vec3(0.5, -apex_offset, 0.0));
    mesh.add_triangle(v0, v3, v2).unwrap();
    mesh.add_triangle(v1, v2, v3).unwrap();
    mesh
}

/// An elongated quad triangulated along its long ("wrong") diagonal,
/// producing two caps meeting along it (§8 scenario 2). A literal unit
/// square's diagonal only ever produces 90-degree corners, never a cap, so
/// this uses a thin rectangle instead — the long diagonal then subtends a
/// near-straight angle at the rectangle's short corners.
pub fn cap_quad() -> SMesh {
    let mut mesh = SMesh::new();
    let v0 = mesh.add_vertex(vec3(0.0, 0.0, 0.0));
    let v1 = mesh.add_vertex(vec3(1.0, 0.0, 0.0));
    let v2 = mesh.add_vertex(vec3(1.0, 0.05, 0.0));
    let v3 = mesh.add_vertex(vec3(0.0, 0.05, 0.0));
    mesh.add_triangle(v0, v1, v2).unwrap();
    mesh.add_triangle(v0, v2, v3).unwrap();
    mesh
}
