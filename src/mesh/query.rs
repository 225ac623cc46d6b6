use crate::mesh::iterators::{FaceIterators, VertexIterators};
use crate::mesh::{
    Connectivity, EdgeId, FaceId, HalfedgeId, SMesh, SMeshError, SMeshResult, VertexId,
};
use crate::mesh_bail;

/// Chainable read-only traversal over mesh handles.
///
/// The teacher crate carries two divergent, partially-overlapping copies of
/// a `MeshQueryBuilder<T>` history-replay abstraction (`src/mesh_query.rs`
/// and `src/smesh/mesh_query.rs`, plus a third near-duplicate in
/// `src/smesh/query.rs`) left over from an in-progress refactor. This crate
/// keeps the same chaining idiom and trait names (`VertexOps`,
/// `HalfedgeOps`, `FaceOps`, `.opposite()`, `.next()`, ...) but collapses
/// them into direct methods on the id types themselves, dropping the
/// replay-a-`Vec<QueryOp>` machinery the teacher never finished unifying.
pub trait VertexOps: Sized {
    fn halfedge(self, mesh: &SMesh) -> SMeshResult<HalfedgeId>;
    fn halfedge_to(self, dst: VertexId, mesh: &SMesh) -> SMeshResult<HalfedgeId>;
    fn is_boundary(self, mesh: &SMesh) -> bool;
    fn is_isolated(self, mesh: &SMesh) -> bool;
    fn valence(self, mesh: &SMesh) -> usize;
    fn is_manifold(self, mesh: &SMesh) -> bool;
    fn position(self, mesh: &SMesh) -> SMeshResult<glam::Vec3>;
}

impl VertexOps for VertexId {
    fn halfedge(self, mesh: &SMesh) -> SMeshResult<HalfedgeId> {
        let v = mesh
            .connectivity
            .vertices
            .get(self)
            .ok_or(SMeshError::VertexNotFound(self))?;
        v.halfedge.ok_or(SMeshError::VertexHasNoHalfedge(self))
    }

    fn halfedge_to(self, dst: VertexId, mesh: &SMesh) -> SMeshResult<HalfedgeId> {
        if self == dst {
            mesh_bail!(NoConnectingHalfedge);
        }
        let start = self.halfedge(mesh)?;
        let mut h = start;
        loop {
            if h.dst_vert(mesh)? == dst {
                return Ok(h);
            }
            h = h.ccw_rotated_neighbour(mesh)?;
            if h == start {
                mesh_bail!(NoConnectingHalfedge);
            }
        }
    }

    fn is_boundary(self, mesh: &SMesh) -> bool {
        if self.is_isolated(mesh) {
            return false;
        }
        self.halfedges(mesh).any(|he| he.is_boundary(mesh))
    }

    fn is_isolated(self, mesh: &SMesh) -> bool {
        self.halfedge(mesh).is_err()
    }

    fn valence(self, mesh: &SMesh) -> usize {
        self.vertices(mesh).count()
    }

    /// A vertex is non-manifold if it has more than one outgoing boundary
    /// halfedge (more than one "gap" in its fan of incident faces).
    fn is_manifold(self, mesh: &SMesh) -> bool {
        self.halfedges(mesh).filter(|he| he.is_boundary(mesh)).count() < 2
    }

    fn position(self, mesh: &SMesh) -> SMeshResult<glam::Vec3> {
        mesh.positions
            .get(self)
            .copied()
            .ok_or(SMeshError::VertexNotFound(self))
    }
}

pub trait HalfedgeOps: Sized {
    fn vertex(self, mesh: &SMesh) -> SMeshResult<VertexId>;
    fn opposite(self, mesh: &SMesh) -> SMeshResult<HalfedgeId>;
    fn next(self, mesh: &SMesh) -> SMeshResult<HalfedgeId>;
    fn prev(self, mesh: &SMesh) -> SMeshResult<HalfedgeId>;
    fn face(self, mesh: &SMesh) -> SMeshResult<FaceId>;
    fn src_vert(self, mesh: &SMesh) -> SMeshResult<VertexId>;
    fn dst_vert(self, mesh: &SMesh) -> SMeshResult<VertexId>;
    fn ccw_rotated_neighbour(self, mesh: &SMesh) -> SMeshResult<HalfedgeId>;
    fn cw_rotated_neighbour(self, mesh: &SMesh) -> SMeshResult<HalfedgeId>;
    fn is_boundary(self, mesh: &SMesh) -> bool;
    fn edge(self, mesh: &SMesh) -> SMeshResult<EdgeId>;
    fn length(self, mesh: &SMesh) -> SMeshResult<f32>;
}

impl HalfedgeOps for HalfedgeId {
    fn vertex(self, mesh: &SMesh) -> SMeshResult<VertexId> {
        Ok(get_he(&mesh.connectivity, self)?.vertex)
    }

    fn opposite(self, mesh: &SMesh) -> SMeshResult<HalfedgeId> {
        get_he(&mesh.connectivity, self)?
            .opposite
            .ok_or(SMeshError::HalfedgeHasNoOpposite(self))
    }

    fn next(self, mesh: &SMesh) -> SMeshResult<HalfedgeId> {
        get_he(&mesh.connectivity, self)?
            .next
            .ok_or(SMeshError::HalfedgeHasNoNext(self))
    }

    fn prev(self, mesh: &SMesh) -> SMeshResult<HalfedgeId> {
        get_he(&mesh.connectivity, self)?
            .prev
            .ok_or(SMeshError::HalfedgeHasNoPrev(self))
    }

    fn face(self, mesh: &SMesh) -> SMeshResult<FaceId> {
        get_he(&mesh.connectivity, self)?
            .face
            .ok_or(SMeshError::HalfedgeHasNoFace(self))
    }

    fn src_vert(self, mesh: &SMesh) -> SMeshResult<VertexId> {
        self.opposite(mesh)?.vertex(mesh)
    }

    fn dst_vert(self, mesh: &SMesh) -> SMeshResult<VertexId> {
        self.vertex(mesh)
    }

    fn ccw_rotated_neighbour(self, mesh: &SMesh) -> SMeshResult<HalfedgeId> {
        self.prev(mesh)?.opposite(mesh)
    }

    fn cw_rotated_neighbour(self, mesh: &SMesh) -> SMeshResult<HalfedgeId> {
        self.opposite(mesh)?.next(mesh)
    }

    fn is_boundary(self, mesh: &SMesh) -> bool {
        self.face(mesh).is_err()
    }

    fn edge(self, mesh: &SMesh) -> SMeshResult<EdgeId> {
        Ok(EdgeId::new(self, self.opposite(mesh)?))
    }

    fn length(self, mesh: &SMesh) -> SMeshResult<f32> {
        let a = self.src_vert(mesh)?.position(mesh)?;
        let b = self.dst_vert(mesh)?.position(mesh)?;
        Ok((b - a).length())
    }
}

pub trait FaceOps: Sized {
    fn halfedge(self, mesh: &SMesh) -> SMeshResult<HalfedgeId>;
    fn valence(self, mesh: &SMesh) -> usize;
}

impl FaceOps for FaceId {
    fn halfedge(self, mesh: &SMesh) -> SMeshResult<HalfedgeId> {
        mesh.connectivity
            .faces
            .get(self)
            .ok_or(SMeshError::FaceNotFound(self))?
            .halfedge
            .ok_or(SMeshError::FaceHasNoHalfedge(self))
    }

    fn valence(self, mesh: &SMesh) -> usize {
        self.vertices(mesh).count()
    }
}

fn get_he(
    c: &Connectivity,
    id: HalfedgeId,
) -> SMeshResult<&crate::mesh::elements::Halfedge> {
    c.halfedges.get(id).ok_or(SMeshError::HalfedgeNotFound(id))
}
