//! Core B: normal orientation propagation over a point cloud (§1, §4.4-§4.8).
//!
//! The seed finder, Riemannian graph builder, MST, and propagator are
//! private implementation; the only thing the rest of the crate (and any
//! caller) sees is [`orient_normals_via_mst`].

mod graph;
mod mst;
mod options;
mod point;
mod propagate;
mod seed;

pub use graph::RiemannianGraph;
pub use options::OrientOptions;
pub use point::PointRecord;

use crate::precondition::{PreconditionError, PreconditionResult};

/// Assigns a globally consistent orientation to as many of `points`'
/// normals as possible (§4.4-§4.7), then reorders `points` in place so
/// confidently-oriented points precede ambiguous ones (§4.8).
///
/// Returns the partition boundary index.
pub fn orient_normals_via_mst(
    points: &mut Vec<PointRecord>,
    k: usize,
    options: &OrientOptions,
) -> PreconditionResult<usize> {
    options.validate()?;
    if points.is_empty() {
        return Err(PreconditionError::EmptyInput);
    }
    if k < 2 {
        return Err(PreconditionError::KTooSmall(k));
    }

    let span = tracing::info_span!(
        "orient_normals_via_mst",
        points = points.len(),
        k,
        max_propagation_angle = options.max_propagation_angle,
    );
    let _enter = span.enter();

    let root = seed::find_seed(points);
    tracing::debug!(root, "seed selected");

    let graph = graph::build_riemannian_graph(points, k);
    tracing::debug!(edges = graph.edge_count(), "riemannian graph built");

    let predecessor = mst::minimum_spanning_tree(&graph, root);
    let boundary = propagate::propagate_and_partition(points, &predecessor, root, options);
    tracing::debug!(
        oriented = boundary,
        unoriented = points.len() - boundary,
        "orientation propagation complete"
    );

    Ok(boundary)
}

#[cfg(test)]
mod test {
    use super::*;
    use glam::{vec3, Vec3};

    fn hemisphere(n: usize, seed: u64) -> Vec<PointRecord> {
        let mut rng = fastrand::Rng::with_seed(seed);
        (0..n)
            .map(|_| {
                let theta = rng.f32() * std::f32::consts::PI * 2.0;
                let phi = rng.f32() * std::f32::consts::FRAC_PI_2; // upper hemisphere
                let r = vec3(
                    phi.sin() * theta.cos(),
                    phi.sin() * theta.sin(),
                    phi.cos(),
                );
                let normal = if rng.bool() { r } else { -r };
                PointRecord::new(r, normal)
            })
            .collect()
    }

    #[test]
    fn hemisphere_normals_all_point_outward() {
        let mut points = hemisphere(200, 42);
        let options = OrientOptions::default();
        let boundary = orient_normals_via_mst(&mut points, 8, &options).unwrap();
        assert_eq!(boundary, points.len());
        for p in &points {
            assert!(p.position.normalize_or_zero().dot(p.normal) > 0.0);
        }
    }

    #[test]
    fn seam_plane_agrees_within_each_plane() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut points = Vec::new();
        for _ in 0..50 {
            let p = vec3(rng.f32() - 0.5, rng.f32() - 0.5, 1.0);
            let n = if rng.bool() { Vec3::Z } else { -Vec3::Z };
            points.push(PointRecord::new(p, n));
        }
        for _ in 0..50 {
            let p = vec3(rng.f32() - 0.5, rng.f32() - 0.5, 0.0);
            let n = if rng.bool() { Vec3::Z } else { -Vec3::Z };
            points.push(PointRecord::new(p, n));
        }

        let options = OrientOptions::default();
        let boundary = orient_normals_via_mst(&mut points, 8, &options).unwrap();
        assert_eq!(boundary, points.len());

        let top_sign = points.iter().find(|p| p.position.z > 0.5).unwrap().normal.z;
        for p in points.iter().filter(|p| p.position.z > 0.5) {
            assert_eq!(p.normal.z.signum(), top_sign.signum());
        }
        let bottom_sign = points
            .iter()
            .find(|p| p.position.z < 0.5)
            .unwrap()
            .normal
            .z;
        for p in points.iter().filter(|p| p.position.z < 0.5) {
            assert_eq!(p.normal.z.signum(), bottom_sign.signum());
        }
    }

    #[test]
    fn rejects_k_below_two() {
        let mut points = vec![PointRecord::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0))];
        assert_eq!(
            orient_normals_via_mst(&mut points, 1, &OrientOptions::default()),
            Err(PreconditionError::KTooSmall(1))
        );
    }

    #[test]
    fn rejects_empty_input() {
        let mut points: Vec<PointRecord> = Vec::new();
        assert_eq!(
            orient_normals_via_mst(&mut points, 8, &OrientOptions::default()),
            Err(PreconditionError::EmptyInput)
        );
    }
}
