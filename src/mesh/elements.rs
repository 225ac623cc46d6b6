use slotmap::{new_key_type, Key};

new_key_type! { pub struct VertexId; }
new_key_type! { pub struct HalfedgeId; }
new_key_type! { pub struct FaceId; }

/// An edge is never stored in its own arena; it is the unordered pair of a
/// halfedge and its opposite, canonicalized to whichever of the two has the
/// lower raw key. This mirrors how the working sets in the repair driver
/// need to talk about "the edge", not "the halfedge", without paying for a
/// fourth slotmap that would have to be kept in sync with every collapse
/// and flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(HalfedgeId, HalfedgeId);

impl EdgeId {
    /// `h` and `opposite` must be the two halfedges of the same edge.
    pub fn new(h: HalfedgeId, opposite: HalfedgeId) -> Self {
        if h.data().as_ffi() <= opposite.data().as_ffi() {
            EdgeId(h, opposite)
        } else {
            EdgeId(opposite, h)
        }
    }

    pub fn canonical_halfedge(&self) -> HalfedgeId {
        self.0
    }

    pub fn other_halfedge(&self) -> HalfedgeId {
        self.1
    }

    pub fn contains(&self, h: HalfedgeId) -> bool {
        self.0 == h || self.1 == h
    }
}

#[derive(Debug, Default, Clone)]
pub struct Vertex {
    pub halfedge: Option<HalfedgeId>,
}

#[derive(Debug, Default, Clone)]
pub struct Halfedge {
    pub vertex: VertexId,
    pub face: Option<FaceId>,
    pub opposite: Option<HalfedgeId>,
    pub prev: Option<HalfedgeId>,
    pub next: Option<HalfedgeId>,
}

#[derive(Debug, Default, Clone)]
pub struct Face {
    pub halfedge: Option<HalfedgeId>,
}
