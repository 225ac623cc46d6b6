//! Core A: almost-degenerate triangle repair (§1, §4.1-§4.3).
//!
//! The shape classifier (`classify`), the candidate queue manager
//! (`queue`), and the fixed-point driver (`driver`) are private
//! implementation; the only thing the rest of the crate (and any caller)
//! sees is [`repair_almost_degenerate_faces`].

mod classify;
mod driver;
mod options;
mod queue;

pub use classify::{classify, Classification};
pub use options::RepairOptions;

use crate::mesh::iterators::FaceIterators;
use crate::mesh::query::VertexOps;
use crate::mesh::{FaceId, SMesh};
use crate::precondition::{PreconditionError, PreconditionResult};

/// Iteratively eliminates needle and cap faces among `faces` by edge
/// collapse and edge flip (§4.2-§4.3).
///
/// Returns `Ok(true)` if a fixed point with zero bad faces was reached,
/// `Ok(false)` if a full iteration made no further change while bad faces
/// remain (§7 "geometric stall" — not an error).
pub fn repair_almost_degenerate_faces(
    faces: impl IntoIterator<Item = FaceId>,
    mesh: &mut SMesh,
    options: &RepairOptions,
) -> PreconditionResult<bool> {
    options.validate()?;
    let faces: Vec<FaceId> = faces.into_iter().collect();

    let span = tracing::info_span!(
        "repair_almost_degenerate_faces",
        faces = faces.len(),
        needle_ratio = options.needle_ratio,
        cap_angle_cosine = options.cap_angle_cosine,
        collapse_length_max = options.collapse_length_max,
    );
    let _enter = span.enter();

    // §7: non-manifold input fails fast rather than silently corrupting the
    // mesh; every vertex touched by a candidate face is checked up front
    // since the driver has no way to recover once it starts mutating.
    for &f in &faces {
        for v in f.vertices(mesh) {
            if !v.is_manifold(mesh) {
                return Err(PreconditionError::NonManifoldInput);
            }
        }
    }

    let reached_fixed_point =
        driver::run(faces, mesh, options).expect("mesh invariant violated during repair");
    tracing::debug!(reached_fixed_point, "repair complete");
    Ok(reached_fixed_point)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mesh::primitives::needle_bowtie;

    #[test]
    fn idempotent_on_already_repaired_mesh() {
        let mut mesh = needle_bowtie(0.001);
        let options = RepairOptions::default();
        let faces: Vec<FaceId> = mesh.faces().collect();
        assert!(repair_almost_degenerate_faces(faces, &mut mesh, &options).unwrap());

        let faces: Vec<FaceId> = mesh.faces().collect();
        assert!(repair_almost_degenerate_faces(faces, &mut mesh, &options).unwrap());
    }

    #[test]
    fn rejects_out_of_range_options() {
        let mut mesh = needle_bowtie(0.001);
        let options = RepairOptions {
            needle_ratio: -1.0,
            ..RepairOptions::default()
        };
        let faces: Vec<FaceId> = mesh.faces().collect();
        assert_eq!(
            repair_almost_degenerate_faces(faces, &mut mesh, &options),
            Err(PreconditionError::NeedleRatioOutOfRange(-1.0))
        );
    }
}
