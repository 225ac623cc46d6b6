use crate::mesh::{FaceId, HalfedgeId, VertexId};

/// Errors raised by the half-edge arena's own query and mutation layer.
///
/// These only ever surface when a handle is stale or the mesh is already
/// inconsistent (e.g. a vertex with no incident halfedge being asked for
/// one); a caller driving only the surface operations in [`crate::repair`]
/// and [`crate::orient`] should never observe one directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SMeshError {
    #[error("vertex {0:?} not found")]
    VertexNotFound(VertexId),
    #[error("vertex {0:?} has no incident halfedge")]
    VertexHasNoHalfedge(VertexId),
    #[error("halfedge {0:?} not found")]
    HalfedgeNotFound(HalfedgeId),
    #[error("halfedge {0:?} has no opposite")]
    HalfedgeHasNoOpposite(HalfedgeId),
    #[error("halfedge {0:?} has no next")]
    HalfedgeHasNoNext(HalfedgeId),
    #[error("halfedge {0:?} has no prev")]
    HalfedgeHasNoPrev(HalfedgeId),
    #[error("halfedge {0:?} has no incident face")]
    HalfedgeHasNoFace(HalfedgeId),
    #[error("face {0:?} not found")]
    FaceNotFound(FaceId),
    #[error("face {0:?} has no incident halfedge")]
    FaceHasNoHalfedge(FaceId),
    #[error("no halfedge connects the given vertices")]
    NoConnectingHalfedge,
    #[error("topological error while building a face")]
    TopologyError,
    #[error("a face must have at least 3 vertices")]
    DegenerateFace,
}

pub type SMeshResult<T> = Result<T, SMeshError>;

/// Shorthand for returning an [`SMeshError`] variant, mirroring the
/// teacher's `bail!` macro.
#[macro_export]
macro_rules! mesh_bail {
    ($error:ident) => {
        return Err($crate::mesh::SMeshError::$error);
    };
    ($error:ident, $($value:expr),+) => {
        return Err($crate::mesh::SMeshError::$error($($value),+));
    };
}
