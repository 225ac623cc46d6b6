use glam::Vec3;
use itertools::Itertools;
use slotmap::SecondaryMap;

use crate::mesh::elements::{Face, Halfedge, Vertex};
use crate::mesh::iterators::{FaceIterators, VertexIterators};
use crate::mesh::query::{FaceOps, HalfedgeOps, VertexOps};
use crate::mesh::{Connectivity, FaceId, HalfedgeId, SMeshError, SMeshResult, VertexId};
use crate::mesh_bail;

/// A connected, oriented, manifold triangle (or general polygon) mesh
/// backed by an index arena, following the teacher crate's
/// `Connectivity`/`SMesh` split (`src/smesh/model/`).
#[derive(Debug, Clone, Default)]
pub struct SMesh {
    pub connectivity: Connectivity,
    pub positions: SecondaryMap<VertexId, Vec3>,
    pub vertex_normals: Option<SecondaryMap<VertexId, Vec3>>,
    pub face_normals: Option<SecondaryMap<FaceId, Vec3>>,
}

impl SMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.connectivity.vertices.keys()
    }

    pub fn halfedges(&self) -> impl Iterator<Item = HalfedgeId> + '_ {
        self.connectivity.halfedges.keys()
    }

    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.connectivity.faces.keys()
    }

    pub fn is_triangle_mesh(&self) -> bool {
        self.faces().all(|f| f.valence(self) == 3)
    }
}

/// Construction primitives.
impl SMesh {
    pub fn add_vertex(&mut self, position: Vec3) -> VertexId {
        let id = self.connectivity.vertices.insert(Vertex::default());
        self.positions.insert(id, position);
        id
    }

    /// Inserts a fresh pair of opposite halfedges (v0 -> v1) and (v1 -> v0).
    /// Returns the (v0 -> v1) halfedge.
    pub fn add_edge(&mut self, v0: VertexId, v1: VertexId) -> HalfedgeId {
        let he0 = self.connectivity.halfedges.insert(Halfedge::default());
        let he1 = self.connectivity.halfedges.insert(Halfedge::default());
        self.connectivity.he_mut(he0).vertex = v1;
        self.connectivity.he_mut(he0).opposite = Some(he1);
        self.connectivity.he_mut(he1).vertex = v0;
        self.connectivity.he_mut(he1).opposite = Some(he0);
        he0
    }

    pub fn add_triangle(&mut self, v0: VertexId, v1: VertexId, v2: VertexId) -> SMeshResult<FaceId> {
        self.add_face(vec![v0, v1, v2])
    }

    /// Builds a face from an ordered vertex loop, reusing any halfedges that
    /// already connect consecutive vertices and relinking boundary gaps as
    /// needed. This is a direct port of the teacher's `add_face`
    /// (`src/smesh.rs`), itself the classic `pmp-library`/`OpenMesh`
    /// "patch relinking" construction, adapted to compare evaluated
    /// halfedge ids instead of unevaluated query-builder values (the
    /// teacher's in-flight query-builder refactor left that comparison
    /// comparing builders, which can never match). The gap-search loop's
    /// break condition (`!boundary_prev.is_boundary(self) || boundary_prev
    /// == inner_prev`) matches the teacher's polarity exactly: it walks
    /// forward while still on boundary halfedges, stopping either at the
    /// closing `inner_prev` (success) or at the first non-boundary
    /// halfedge, which the check just below turns into a `TopologyError`.
    pub fn add_face(&mut self, vertices: Vec<VertexId>) -> SMeshResult<FaceId> {
        let n = vertices.len();
        if n < 3 {
            mesh_bail!(DegenerateFace);
        }

        // For each consecutive vertex pair, find or create the connecting
        // halfedge. `true` marks a freshly created halfedge.
        let mut halfedges: Vec<(HalfedgeId, bool)> = Vec::with_capacity(n);
        for (&v0, &v1) in vertices.iter().circular_tuple_windows() {
            if !v0.is_isolated(self) && !v0.is_boundary(self) {
                mesh_bail!(TopologyError);
            }
            match v0.halfedge_to(v1, self) {
                Ok(he_id) => {
                    if !he_id.is_boundary(self) {
                        mesh_bail!(TopologyError);
                    }
                    halfedges.push((he_id, false));
                }
                Err(_) => {
                    let he_id = self.add_edge(v0, v1);
                    halfedges.push((he_id, true));
                }
            }
        }

        let mut next_cache: Vec<(HalfedgeId, HalfedgeId)> = Vec::new();
        let mut needs_adjust: Vec<VertexId> = Vec::new();

        // Relink patches where two pre-existing, non-adjacent halfedges meet.
        for ((inner_prev, prev_new), (inner_next, next_new)) in
            halfedges.iter().copied().circular_tuple_windows()
        {
            if prev_new || next_new {
                continue;
            }
            if inner_prev.next(self)? == inner_next {
                continue;
            }
            // Search for a free gap between two boundary halfedges to splice
            // the existing patch into.
            let outer_prev = inner_next.opposite(self)?;
            let outer_next = inner_prev.opposite(self)?;
            let mut boundary_prev = outer_prev;
            loop {
                boundary_prev = boundary_prev.next(self)?.opposite(self)?;
                if !boundary_prev.is_boundary(self) || boundary_prev == inner_prev {
                    break;
                }
            }
            let boundary_next = boundary_prev.next(self)?;
            if !boundary_prev.is_boundary(self)
                || !boundary_next.is_boundary(self)
                || boundary_next == inner_next
            {
                mesh_bail!(TopologyError);
            }

            let patch_start = inner_prev.next(self)?;
            let patch_end = inner_next.prev(self)?;

            next_cache.push((boundary_prev, patch_start));
            next_cache.push((patch_end, boundary_next));
            next_cache.push((inner_prev, inner_next));
        }

        let face_id = self.connectivity.faces.insert(Face {
            halfedge: Some(halfedges[n - 1].0),
        });

        for i in 0..n {
            let ii = (i + 1) % n;
            let v = vertices[ii];
            let (inner_prev, prev_new) = halfedges[i];
            let (inner_next, next_new) = halfedges[ii];

            if prev_new || next_new {
                let outer_prev = inner_next.opposite(self)?;
                let outer_next = inner_prev.opposite(self)?;

                if prev_new && !next_new {
                    let boundary_prev = inner_next.prev(self)?;
                    next_cache.push((boundary_prev, outer_next));
                    self.connectivity.vert_mut(v).halfedge = Some(outer_next);
                } else if !prev_new && next_new {
                    let boundary_next = inner_prev.next(self)?;
                    next_cache.push((outer_prev, boundary_next));
                    self.connectivity.vert_mut(v).halfedge = Some(boundary_next);
                } else {
                    // both new
                    match v.halfedge(self) {
                        Ok(boundary_next) => {
                            let boundary_prev = boundary_next.prev(self)?;
                            next_cache.push((boundary_prev, outer_next));
                            next_cache.push((outer_prev, boundary_next));
                        }
                        Err(_) => {
                            self.connectivity.vert_mut(v).halfedge = Some(outer_next);
                            next_cache.push((outer_prev, outer_next));
                        }
                    }
                }
                next_cache.push((inner_prev, inner_next));
            } else if v.halfedge(self)? == inner_next {
                needs_adjust.push(v);
            }

            self.connectivity.he_mut(inner_prev).face = Some(face_id);
        }

        for (a, b) in next_cache {
            self.connectivity.he_mut(a).next = Some(b);
            self.connectivity.he_mut(b).prev = Some(a);
        }

        for v in needs_adjust {
            self.adjust_outgoing_halfedge(v)?;
        }

        Ok(face_id)
    }

    /// Picks a boundary halfedge as the vertex's stored outgoing halfedge
    /// when one exists, so vertex-ring walks can find the fan's starting
    /// gap. Direct port of the teacher's `adjust_outgoing_halfedge`.
    pub fn adjust_outgoing_halfedge(&mut self, v: VertexId) -> SMeshResult<()> {
        let Ok(start) = v.halfedge(self) else {
            // Isolated vertex: nothing to adjust.
            return Ok(());
        };
        let mut h = start;
        loop {
            if h.is_boundary(self) {
                self.connectivity.vert_mut(v).halfedge = Some(h);
                return Ok(());
            }
            h = h.cw_rotated_neighbour(self)?;
            if h == start {
                return Ok(());
            }
        }
    }

    /// Removes a face and its three halfedges/edges, leaving the remaining
    /// neighbors as border halfedges. Used both directly (§4.2 "face
    /// remove") and as a building block of vertex/edge deletion.
    pub fn remove_face(&mut self, f: FaceId) -> SMeshResult<()> {
        let halfedges: Vec<HalfedgeId> = f.halfedges(self).collect();
        for h in &halfedges {
            self.connectivity.he_mut(*h).face = None;
        }
        for h in &halfedges {
            let opp = h.opposite(self)?;
            if opp.is_boundary(self) {
                self.remove_edge(*h)?;
            }
        }
        self.connectivity.faces.remove(f);
        for h in halfedges {
            if let Ok(vert) = h.dst_vert(self) {
                self.adjust_outgoing_halfedge(vert)?;
            }
        }
        Ok(())
    }

    /// Removes an edge (both of its halfedges) that is entirely on the
    /// border (neither side has a face), patching up the vertices'
    /// outgoing-halfedge pointers and the neighbors' next/prev links.
    fn remove_edge(&mut self, h: HalfedgeId) -> SMeshResult<()> {
        let opp = h.opposite(self)?;
        debug_assert!(h.is_boundary(self) && opp.is_boundary(self));

        let h_prev = h.prev(self)?;
        let h_next = h.next(self)?;
        let opp_prev = opp.prev(self)?;
        let opp_next = opp.next(self)?;

        self.connectivity.he_mut(h_prev).next = Some(opp_next);
        self.connectivity.he_mut(opp_next).prev = Some(h_prev);
        self.connectivity.he_mut(opp_prev).next = Some(h_next);
        self.connectivity.he_mut(h_next).prev = Some(opp_prev);

        let src = h.src_vert(self)?;
        let dst = h.dst_vert(self)?;
        if self.connectivity.vertices[src].halfedge == Some(h) {
            self.connectivity.vert_mut(src).halfedge =
                if opp_next == h { None } else { Some(opp_next) };
        }
        if self.connectivity.vertices[dst].halfedge == Some(opp) {
            self.connectivity.vert_mut(dst).halfedge =
                if h_next == opp { None } else { Some(h_next) };
        }

        self.connectivity.halfedges.remove(h);
        self.connectivity.halfedges.remove(opp);
        Ok(())
    }

    /// Removes a vertex and every face incident to it.
    pub fn delete_vertex(&mut self, v: VertexId) -> SMeshResult<()> {
        let faces: Vec<FaceId> = v
            .halfedges(self)
            .filter_map(|h| h.face(self).ok())
            .unique()
            .collect();
        for f in faces {
            self.remove_face(f)?;
        }
        if v.is_isolated(self) {
            self.connectivity.vertices.remove(v);
            self.positions.remove(v);
        }
        Ok(())
    }
}
