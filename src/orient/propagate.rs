//! The orientation propagator (§4.7) and partition output (§4.8).

use std::collections::VecDeque;

use crate::orient::options::OrientOptions;
use crate::orient::point::PointRecord;

/// Breadth-first propagation of orientation from `root` over the directed
/// tree described by `predecessor` (§4.7), followed by the stable
/// partition of §4.8. Reorders `points` in place and returns the partition
/// boundary index.
pub fn propagate_and_partition(
    points: &mut Vec<PointRecord>,
    predecessor: &[usize],
    root: usize,
    options: &OrientOptions,
) -> usize {
    let n = points.len();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, &p) in predecessor.iter().enumerate() {
        if i != root && p != i {
            children[p].push(i);
        }
    }

    let mut is_oriented = vec![false; n];
    is_oriented[root] = true;
    let cos_theta_max = options.max_propagation_angle.cos();

    let mut queue = VecDeque::new();
    queue.push_back(root);
    let mut oriented_count = 1usize;
    while let Some(s) = queue.pop_front() {
        for &t in &children[s] {
            if points[s].normal.dot(points[t].normal) < 0.0 {
                points[t].normal = -points[t].normal;
            }
            let aligned = points[s].normal.dot(points[t].normal).abs() >= cos_theta_max;
            is_oriented[t] = is_oriented[s] && aligned;
            if is_oriented[t] {
                oriented_count += 1;
            }
            queue.push_back(t);
        }
    }
    tracing::debug!(
        oriented = oriented_count,
        unoriented = n - oriented_count,
        "normal propagation complete"
    );

    stable_partition_by_oriented(points, &is_oriented)
}

/// Stably partitions `points` so every point with `is_oriented[i] == true`
/// precedes every point with `is_oriented[i] == false`, each group
/// preserving its original relative order. Returns the boundary index.
fn stable_partition_by_oriented(points: &mut [PointRecord], is_oriented: &[bool]) -> usize {
    let oriented: Vec<PointRecord> = points
        .iter()
        .zip(is_oriented)
        .filter(|(_, &o)| o)
        .map(|(p, _)| *p)
        .collect();
    let boundary = oriented.len();
    let unoriented: Vec<PointRecord> = points
        .iter()
        .zip(is_oriented)
        .filter(|(_, &o)| !o)
        .map(|(p, _)| *p)
        .collect();

    points[..boundary].copy_from_slice(&oriented);
    points[boundary..].copy_from_slice(&unoriented);
    boundary
}

#[cfg(test)]
mod test {
    use super::*;
    use glam::vec3;

    #[test]
    fn flips_anti_aligned_child_and_keeps_it_oriented() {
        let mut points = vec![
            PointRecord::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)),
            PointRecord::new(vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0)),
        ];
        let predecessor = vec![0, 0];
        let options = OrientOptions::default();
        let boundary = propagate_and_partition(&mut points, &predecessor, 0, &options);
        assert_eq!(boundary, 2);
        for p in &points {
            assert!(p.normal.dot(vec3(0.0, 0.0, 1.0)) >= 0.0);
        }
    }

    #[test]
    fn unoriented_descendants_sort_after_oriented_ones() {
        // A tighter-than-default threshold (45 degrees) makes the
        // orthogonal child fail the confidence test even though it still
        // gets flipped into non-negative alignment with its parent; its
        // own child then inherits the unoriented flag.
        let mut points = vec![
            PointRecord::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)),
            PointRecord::new(vec3(1.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)), // orthogonal to root
            PointRecord::new(vec3(2.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)),
        ];
        let predecessor = vec![0, 0, 1];
        let options = OrientOptions {
            max_propagation_angle: std::f32::consts::FRAC_PI_4,
        };
        let boundary = propagate_and_partition(&mut points, &predecessor, 0, &options);
        assert_eq!(boundary, 1);
    }
}
