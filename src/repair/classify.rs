//! Per-face needle/cap classifier (§4.1). Grounded on the teacher's own
//! `src/smesh/util.rs` triangle-normal computation for the angle-cosine
//! formula; the needle/cap decision itself has no teacher counterpart and
//! is built directly against the length/angle definitions in the data
//! model.

use slotmap::Key;

use crate::mesh::iterators::FaceIterators;
use crate::mesh::query::{HalfedgeOps, VertexOps};
use crate::mesh::{FaceId, HalfedgeId, SMesh, SMeshResult};
use crate::repair::RepairOptions;

/// At most one field is `Some`. Mirrors `classify(face) -> (needle | null, cap | null)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub needle: Option<HalfedgeId>,
    pub cap: Option<HalfedgeId>,
}

fn handle_order(h: HalfedgeId) -> u64 {
    h.data().as_ffi()
}

/// Classifies `face` as a needle, a cap, or neither, per §4.1. Pure: reads
/// only `face`'s own three halfedges and their endpoint positions.
pub fn classify(face: FaceId, mesh: &SMesh, options: &RepairOptions) -> SMeshResult<Classification> {
    let hs: Vec<HalfedgeId> = face.halfedges(mesh).collect();
    debug_assert_eq!(hs.len(), 3, "classifier assumes a triangle mesh");
    let (h0, h1, h2) = (hs[0], hs[1], hs[2]);

    let lengths = [h0.length(mesh)?, h1.length(mesh)?, h2.length(mesh)?];
    let shortest = argmin_by_handle(&hs, &lengths);
    let longest = argmax_by_handle(&hs, &lengths);

    if lengths[longest] > 0.0 && lengths[shortest] > 0.0 {
        if lengths[longest] / lengths[shortest] > options.needle_ratio {
            return Ok(Classification {
                needle: Some(hs[shortest]),
                cap: None,
            });
        }
    } else if lengths[longest] > 0.0 {
        // A zero-length shortest edge is the most extreme possible needle.
        return Ok(Classification {
            needle: Some(hs[shortest]),
            cap: None,
        });
    }

    // Opposite-halfedge mapping for a triangle h0(v0->v1), h1(v1->v2), h2(v2->v0):
    // the angle at v0 is opposite h1, at v1 opposite h2, at v2 opposite h0.
    let v0 = h0.src_vert(mesh)?;
    let v1 = h1.src_vert(mesh)?;
    let v2 = h2.src_vert(mesh)?;
    let p0 = v0.position(mesh)?;
    let p1 = v1.position(mesh)?;
    let p2 = v2.position(mesh)?;

    let angles = [
        (h1, angle_cosine(p1 - p0, p2 - p0)),
        (h2, angle_cosine(p0 - p1, p2 - p1)),
        (h0, angle_cosine(p0 - p2, p1 - p2)),
    ];

    for (opposite, cosine) in angles {
        if cosine < options.cap_angle_cosine {
            return Ok(Classification {
                needle: None,
                cap: Some(opposite),
            });
        }
    }

    Ok(Classification::default())
}

fn angle_cosine(a: glam::Vec3, b: glam::Vec3) -> f32 {
    let denom = a.length() * b.length();
    if denom == 0.0 {
        1.0
    } else {
        (a.dot(b) / denom).clamp(-1.0, 1.0)
    }
}

fn argmin_by_handle(hs: &[HalfedgeId], lengths: &[f32; 3]) -> usize {
    (0..3)
        .min_by(|&a, &b| {
            lengths[a]
                .partial_cmp(&lengths[b])
                .unwrap()
                .then_with(|| handle_order(hs[a]).cmp(&handle_order(hs[b])))
        })
        .unwrap()
}

fn argmax_by_handle(hs: &[HalfedgeId], lengths: &[f32; 3]) -> usize {
    (0..3)
        .max_by(|&a, &b| {
            lengths[a]
                .partial_cmp(&lengths[b])
                .unwrap()
                .then_with(|| handle_order(hs[b]).cmp(&handle_order(hs[a])))
        })
        .unwrap()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mesh::primitives::{add_triangle, cap_quad, needle_bowtie};
    use crate::mesh::SMesh;

    #[test]
    fn equilateral_triangle_is_neither() {
        let mut mesh = SMesh::new();
        let (.., f0) = add_triangle(&mut mesh);
        let c = classify(f0, &mesh, &RepairOptions::default()).unwrap();
        assert_eq!(c, Classification::default());
    }

    #[test]
    fn thin_kite_faces_are_needles() {
        let mesh = needle_bowtie(0.001);
        let options = RepairOptions::default();
        for f in mesh.faces() {
            let c = classify(f, &mesh, &options).unwrap();
            assert!(c.needle.is_some(), "expected a needle classification");
            assert!(c.cap.is_none());
        }
    }

    #[test]
    fn cap_quad_faces_are_caps() {
        let mesh = cap_quad();
        let options = RepairOptions::default();
        for f in mesh.faces() {
            let c = classify(f, &mesh, &options).unwrap();
            assert!(c.cap.is_some(), "expected a cap classification");
            assert!(c.needle.is_none());
        }
    }
}
