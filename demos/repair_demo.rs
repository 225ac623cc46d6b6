//! Runs `repair_almost_degenerate_faces` over a couple of hand-built
//! almost-degenerate fixtures and prints what changed.

use geomrepair::prelude::*;

fn report(name: &str, mesh: &SMesh, faces_before: usize) {
    let faces_after = mesh.faces().count();
    println!(
        "{name}: {faces_before} face(s) before, {faces_after} face(s) after repair"
    );
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut bowtie = primitives::needle_bowtie(0.02);
    let faces_before = bowtie.faces().count();
    let faces: Vec<FaceId> = bowtie.faces().collect();
    repair_almost_degenerate_faces(faces, &mut bowtie, &RepairOptions::default())
        .expect("valid repair options");
    report("needle bowtie", &bowtie, faces_before);

    let mut cap = primitives::cap_quad();
    let faces_before = cap.faces().count();
    let faces: Vec<FaceId> = cap.faces().collect();
    repair_almost_degenerate_faces(faces, &mut cap, &RepairOptions::default())
        .expect("valid repair options");
    report("cap quad", &cap, faces_before);
}
