//! The fixed-point driver (§4.3): alternates classification, collapse, and
//! flip over two working sets until no bad faces remain or a full
//! iteration makes no progress.

use std::collections::HashSet;

use crate::mesh::iterators::FaceIterators;
use crate::mesh::query::{HalfedgeOps, VertexOps};
use crate::mesh::{EdgeId, FaceId, HalfedgeId, SMesh, SMeshResult};
use crate::repair::classify::classify;
use crate::repair::queue::{pop_any, Queues};
use crate::repair::RepairOptions;

pub fn run(faces: Vec<FaceId>, mesh: &mut SMesh, options: &RepairOptions) -> SMeshResult<bool> {
    let mut current = Queues::default();
    for face in faces {
        if mesh.connectivity.faces.contains_key(face) {
            seed_or_reroute(face, mesh, options, &mut current.collapse, &mut current.flip)?;
        }
    }

    loop {
        if current.is_empty() {
            return Ok(true);
        }

        let mut next = Queues::default();
        let mut progress = false;

        progress |= process_collapses(mesh, options, &mut current, &mut next)?;
        progress |= process_flips(mesh, options, &mut current, &mut next)?;

        if !progress {
            return Ok(false);
        }
        current = next;
    }
}

/// Classifies `face` and routes the result into `collapse`/`flip`, the rule
/// shared by initialization and by every stale-candidate reroute (§4.3).
fn seed_or_reroute(
    face: FaceId,
    mesh: &SMesh,
    options: &RepairOptions,
    collapse: &mut HashSet<EdgeId>,
    flip: &mut HashSet<EdgeId>,
) -> SMeshResult<()> {
    let c = classify(face, mesh, options)?;
    if let Some(needle) = c.needle {
        if needle.length(mesh)? <= options.collapse_length_max {
            collapse.insert(needle.edge(mesh)?);
        }
    } else if let Some(cap) = c.cap {
        flip.insert(cap.edge(mesh)?);
    }
    Ok(())
}

fn edge_alive(e: EdgeId, mesh: &SMesh) -> bool {
    mesh.connectivity.halfedges.contains_key(e.canonical_halfedge())
        && mesh.connectivity.halfedges.contains_key(e.other_halfedge())
}

/// Picks a halfedge of `e` that has an incident face, preferring whichever
/// side has one. `None` only if `e` is entirely border, which this driver's
/// own operations never produce without also removing the edge.
fn face_side(e: EdgeId, mesh: &SMesh) -> Option<HalfedgeId> {
    let h = e.canonical_halfedge();
    if h.face(mesh).is_ok() {
        return Some(h);
    }
    let o = e.other_halfedge();
    if o.face(mesh).is_ok() {
        return Some(o);
    }
    None
}

fn process_collapses(
    mesh: &mut SMesh,
    options: &RepairOptions,
    current: &mut Queues,
    next: &mut Queues,
) -> SMeshResult<bool> {
    let mut progress = false;
    while let Some(e) = pop_any(&mut current.collapse) {
        if !edge_alive(e, mesh) {
            continue;
        }
        let Some(h) = face_side(e, mesh) else {
            continue;
        };
        let face = h.face(mesh)?;
        let c = classify(face, mesh, options)?;
        let matches_needle = c.needle.and_then(|nh| nh.edge(mesh).ok()) == Some(e);
        if !matches_needle {
            seed_or_reroute(face, mesh, options, &mut next.collapse, &mut next.flip)?;
            continue;
        }

        if !mesh.is_collapse_ok(h) {
            tracing::debug!(?e, "link condition failed, deferring collapse");
            next.collapse.insert(e);
            continue;
        }

        tracing::debug!(?e, "collapsing needle edge");
        mesh.collapse_edge(h)?;
        progress = true;
    }
    Ok(progress)
}

fn process_flips(
    mesh: &mut SMesh,
    options: &RepairOptions,
    current: &mut Queues,
    next: &mut Queues,
) -> SMeshResult<bool> {
    let mut progress = false;
    while let Some(e) = pop_any(&mut current.flip) {
        if !edge_alive(e, mesh) {
            continue;
        }
        let h = e.canonical_halfedge();
        let o = e.other_halfedge();
        let h_face = h.face(mesh).ok();
        let o_face = o.face(mesh).ok();
        let Some(face) = h_face.or(o_face) else {
            continue;
        };

        let c = classify(face, mesh, options)?;
        let matches_cap = c.cap.and_then(|ch| ch.edge(mesh).ok()) == Some(e);
        if !matches_cap {
            seed_or_reroute(face, mesh, options, &mut next.collapse, &mut next.flip)?;
            continue;
        }

        if h_face.is_none() || o_face.is_none() {
            tracing::debug!(?e, "removing border cap face");
            let in_face_h = if h_face.is_some() { h } else { o };
            let n1 = in_face_h.next(mesh)?.edge(mesh)?;
            let n2 = in_face_h.next(mesh)?.next(mesh)?.edge(mesh)?;
            mesh.remove_face(face)?;
            current.flip.remove(&n1);
            current.flip.remove(&n2);
            progress = true;
            continue;
        }

        let w = h.next(mesh)?.dst_vert(mesh)?;
        let x = o.next(mesh)?.dst_vert(mesh)?;
        if w.halfedge_to(x, mesh).is_ok() {
            tracing::debug!(?e, "cap unflippable: target diagonal already exists");
            continue;
        }

        let n1 = h.next(mesh)?.edge(mesh)?;
        let n2 = h.next(mesh)?.next(mesh)?.edge(mesh)?;
        let n3 = o.next(mesh)?.edge(mesh)?;
        let n4 = o.next(mesh)?.next(mesh)?.edge(mesh)?;
        for n in [n1, n2, n3, n4] {
            current.flip.remove(&n);
        }

        tracing::debug!(?e, "flipping cap edge");
        mesh.flip_edge(h)?;
        progress = true;

        let new_h = w.halfedge_to(x, mesh)?;
        let new_edge = new_h.edge(mesh)?;
        let f0 = new_h.face(mesh)?;
        let f1 = new_h.opposite(mesh)?.face(mesh)?;
        for f in [f0, f1] {
            let c2 = classify(f, mesh, options)?;
            if let Some(cap_h) = c2.cap {
                let cap_edge = cap_h.edge(mesh)?;
                if cap_edge != new_edge {
                    next.flip.insert(cap_edge);
                }
            } else if let Some(needle_h) = c2.needle {
                let needle_edge = needle_h.edge(mesh)?;
                if needle_edge == new_edge {
                    next.collapse.insert(new_edge);
                }
            }
        }
    }
    Ok(progress)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mesh::primitives::{cap_quad, needle_bowtie};
    use crate::repair::classify::classify;

    #[test]
    fn needle_bowtie_collapses_to_a_fixed_point() {
        let mut mesh = needle_bowtie(0.001);
        let faces: Vec<FaceId> = mesh.faces().collect();
        let options = RepairOptions::default();
        let reached_fixed_point = run(faces, &mut mesh, &options).unwrap();
        assert!(reached_fixed_point);
        for f in mesh.faces() {
            let c = classify(f, &mesh, &options).unwrap();
            assert!(c.needle.is_none() && c.cap.is_none());
        }
    }

    #[test]
    fn cap_quad_flips_to_a_fixed_point() {
        let mut mesh = cap_quad();
        let faces: Vec<FaceId> = mesh.faces().collect();
        let options = RepairOptions::default();
        let reached_fixed_point = run(faces, &mut mesh, &options).unwrap();
        assert!(reached_fixed_point);
        assert_eq!(mesh.faces().count(), 2);
        for f in mesh.faces() {
            let c = classify(f, &mesh, &options).unwrap();
            assert!(c.cap.is_none());
        }
    }

    #[test]
    fn border_cap_is_removed() {
        let mut mesh = SMesh::new();
        let v0 = mesh.add_vertex(glam::vec3(0.0, 0.0, 0.0));
        let v1 = mesh.add_vertex(glam::vec3(1.0, 0.0, 0.0));
        let v2 = mesh.add_vertex(glam::vec3(0.5, 0.01, 0.0));
        mesh.add_triangle(v0, v1, v2).unwrap();

        let faces: Vec<FaceId> = mesh.faces().collect();
        let options = RepairOptions::default();
        let reached_fixed_point = run(faces, &mut mesh, &options).unwrap();
        assert!(reached_fixed_point);
        assert_eq!(mesh.faces().count(), 0);
    }

    #[test]
    fn zero_collapse_length_stalls_immediately_as_success() {
        // A needle with collapse_length_max = 0 has no eligible edge, so the
        // working sets start empty and the driver reports a fixed point
        // without ever touching the mesh (§8 scenario 6).
        let mut mesh = needle_bowtie(0.001);
        let faces: Vec<FaceId> = mesh.faces().collect();
        let options = RepairOptions {
            collapse_length_max: 0.0,
            ..RepairOptions::default()
        };
        let reached_fixed_point = run(faces, &mut mesh, &options).unwrap();
        assert!(reached_fixed_point);
        assert_eq!(mesh.faces().count(), 2);
    }
}
