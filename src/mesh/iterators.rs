use crate::mesh::query::{FaceOps, HalfedgeOps, VertexOps};
use crate::mesh::{FaceId, HalfedgeId, SMesh, VertexId};

/// Outgoing halfedges around a vertex, in ccw order, starting from the
/// vertex's stored halfedge. Mirrors the teacher's
/// `HalfedgeAroundVertexIter` (`src/smesh/iterators.rs`).
pub struct HalfedgeAroundVertexIter<'a> {
    mesh: &'a SMesh,
    start: HalfedgeId,
    current: Option<HalfedgeId>,
}

impl Iterator for HalfedgeAroundVertexIter<'_> {
    type Item = HalfedgeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        // A manifold vertex's fan of outgoing halfedges always closes up via
        // ccw_rotated_neighbour; failure here means the mesh invariant is
        // already broken, which is a bug in the caller, not a normal error.
        let next = current
            .ccw_rotated_neighbour(self.mesh)
            .expect("vertex halfedge fan is broken");
        self.current = if next == self.start { None } else { Some(next) };
        Some(current)
    }
}

pub struct VertexAroundVertexIter<'a>(HalfedgeAroundVertexIter<'a>);

impl Iterator for VertexAroundVertexIter<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let he = self.0.next()?;
        Some(he.dst_vert(self.0.mesh).expect("dangling halfedge target"))
    }
}

/// Halfedges around a face, in the face's winding order.
pub struct HalfedgeAroundFaceIter<'a> {
    mesh: &'a SMesh,
    start: HalfedgeId,
    current: Option<HalfedgeId>,
}

impl Iterator for HalfedgeAroundFaceIter<'_> {
    type Item = HalfedgeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let next = current.next(self.mesh).expect("face halfedge loop is broken");
        self.current = if next == self.start { None } else { Some(next) };
        Some(current)
    }
}

pub struct VertexAroundFaceIter<'a>(HalfedgeAroundFaceIter<'a>);

impl Iterator for VertexAroundFaceIter<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let he = self.0.next()?;
        Some(he.dst_vert(self.0.mesh).expect("dangling halfedge target"))
    }
}

pub trait VertexIterators {
    fn halfedges(self, mesh: &SMesh) -> HalfedgeAroundVertexIter;
    fn vertices(self, mesh: &SMesh) -> VertexAroundVertexIter;
}

impl VertexIterators for VertexId {
    fn halfedges(self, mesh: &SMesh) -> HalfedgeAroundVertexIter {
        let start = self.halfedge(mesh).expect("isolated vertex has no ring");
        HalfedgeAroundVertexIter {
            mesh,
            start,
            current: Some(start),
        }
    }

    fn vertices(self, mesh: &SMesh) -> VertexAroundVertexIter {
        VertexAroundVertexIter(self.halfedges(mesh))
    }
}

pub trait FaceIterators {
    fn halfedges(self, mesh: &SMesh) -> HalfedgeAroundFaceIter;
    fn vertices(self, mesh: &SMesh) -> VertexAroundFaceIter;
}

impl FaceIterators for FaceId {
    fn halfedges(self, mesh: &SMesh) -> HalfedgeAroundFaceIter {
        let start = self.halfedge(mesh).expect("face has no halfedge");
        HalfedgeAroundFaceIter {
            mesh,
            start,
            current: Some(start),
        }
    }

    fn vertices(self, mesh: &SMesh) -> VertexAroundFaceIter {
        VertexAroundFaceIter(self.halfedges(mesh))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mesh::primitives::add_quad;
    use crate::mesh::SMesh;
    use itertools::Itertools;

    #[test]
    fn vertex_around_face() {
        let mut mesh = SMesh::new();
        let (v0, v1, v2, v3, f0) = add_quad(&mut mesh);
        let ids = f0.vertices(&mesh).collect_vec();
        assert_eq!(ids, vec![v0, v1, v2, v3]);
    }

    #[test]
    fn vertex_around_vertex_closes_up() {
        let mut mesh = SMesh::new();
        let (v0, ..) = add_quad(&mut mesh);
        let ids = v0.vertices(&mesh).collect_vec();
        assert_eq!(ids.len(), 2);
    }
}
