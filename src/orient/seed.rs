//! The seed finder (§4.4).

use crate::orient::point::PointRecord;

/// Picks the point with the maximum z-coordinate (ties broken by
/// first-encountered) as the root of the MST, and forces its normal to
/// have a non-negative dot product with +z — the one externally-known
/// orientation convention this crate fixes (any convex-hull extremum would
/// do; +z is simply the one chosen here).
///
/// `points` must be non-empty; callers check this as a precondition
/// before calling.
pub fn find_seed(points: &mut [PointRecord]) -> usize {
    let mut best = 0;
    for i in 1..points.len() {
        if points[i].position.z > points[best].position.z {
            best = i;
        }
    }
    if points[best].normal.z < 0.0 {
        tracing::debug!(index = best, "seed normal flipped to align with +z");
        points[best].normal = -points[best].normal;
    }
    best
}

#[cfg(test)]
mod test {
    use super::*;
    use glam::vec3;

    #[test]
    fn picks_max_z_and_flips_its_normal() {
        let mut points = vec![
            PointRecord::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)),
            PointRecord::new(vec3(0.0, 0.0, 2.0), vec3(0.0, 0.0, -1.0)),
            PointRecord::new(vec3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0)),
        ];
        let seed = find_seed(&mut points);
        assert_eq!(seed, 1);
        assert_eq!(points[1].normal, vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn ties_keep_first_encountered() {
        let mut points = vec![
            PointRecord::new(vec3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0)),
            PointRecord::new(vec3(1.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0)),
        ];
        assert_eq!(find_seed(&mut points), 0);
    }
}
