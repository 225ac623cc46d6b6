use slotmap::SlotMap;

use crate::mesh::elements::{Face, FaceId, Halfedge, HalfedgeId, Vertex, VertexId};

#[derive(Debug, Clone, Default)]
pub struct Connectivity {
    pub vertices: SlotMap<VertexId, Vertex>,
    pub halfedges: SlotMap<HalfedgeId, Halfedge>,
    pub faces: SlotMap<FaceId, Face>,
}

impl Connectivity {
    pub fn vert_mut(&mut self, id: VertexId) -> &mut Vertex {
        self.vertices.get_mut(id).expect("dangling VertexId")
    }

    pub fn he_mut(&mut self, id: HalfedgeId) -> &mut Halfedge {
        self.halfedges.get_mut(id).expect("dangling HalfedgeId")
    }

    pub fn face_mut(&mut self, id: FaceId) -> &mut Face {
        self.faces.get_mut(id).expect("dangling FaceId")
    }
}
