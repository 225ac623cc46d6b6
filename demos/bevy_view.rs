//! Repairs a needle mesh and spawns it as a `bevy` render mesh, grounded on
//! the teacher's `examples/visualizer.rs` camera/lighting setup — trimmed to
//! drop the egui inspector, pan-orbit camera, and debug-draw selection
//! tooling that came with the teacher's old attribute/selection model and
//! has no counterpart in this crate's `adapters::bevy` conversion path.

use bevy::prelude::*;
use geomrepair::prelude::*;

fn init_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut smesh = primitives::cap_quad();
    let faces: Vec<FaceId> = smesh.faces().collect();
    repair_almost_degenerate_faces(faces, &mut smesh, &RepairOptions::default())
        .expect("valid repair options");
    smesh.recalculate_normals().expect("mesh invariant violated");

    let mesh: Mesh = smesh.into();
    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial::default())),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.5, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        PointLight::default(),
        Transform::from_xyz(2.0, 3.0, 2.0),
    ));
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, init_system)
        .run();
}
