//! Scatters an ambiguously-oriented hemisphere of points (each normal's
//! sign picked by a coin flip) and propagates a consistent orientation
//! across it, reporting how many points converged.

use geomrepair::prelude::*;
use glam::vec3;

fn hemisphere(n: usize, seed: u64) -> Vec<PointRecord> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..n)
        .map(|_| {
            let theta = rng.f32() * std::f32::consts::PI * 2.0;
            let phi = rng.f32() * std::f32::consts::FRAC_PI_2;
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

fn main() {
    tracing_subscriber::fmt::init();

    let mut points = hemisphere(200, 42);
    let options = OrientOptions::default();
    let boundary = orient_normals_via_mst(&mut points, 8, &options).expect("valid input");

    println!(
        "{boundary}/{} points converged to a consistent orientation",
        points.len()
    );
    let flipped_outward = points
        .iter()
        .filter(|p| p.position.normalize_or_zero().dot(p.normal) > 0.0)
        .count();
    println!("{flipped_outward}/{} normals now point away from the origin", points.len());
}
