pub use crate::mesh::{
    iterators::*, primitives, query::*, Connectivity, EdgeId, Face, FaceId, Halfedge,
    HalfedgeId, SMesh, SMeshError, SMeshResult, Vertex, VertexId,
};
pub use crate::orient::{orient_normals_via_mst, OrientOptions, PointRecord, RiemannianGraph};
pub use crate::precondition::{PreconditionError, PreconditionResult};
pub use crate::repair::{classify, repair_almost_degenerate_faces, Classification, RepairOptions};

pub use slotmap::SecondaryMap;
