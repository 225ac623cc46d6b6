//! Bevy render-mesh conversion (§14), trimmed from the teacher's adapter
//! down to the conversion path: the teacher's UV unwrap/editing, mesh
//! transform, extrude, and interactive-selection/debug-draw tooling all
//! carried UV and general-modeling-kernel functionality this crate has no
//! use for (§1 Non-goals), so only `to_buffers`/`From<SMesh> for Mesh`
//! survives.

use bevy::render::{
    mesh::{Indices, Mesh, PrimitiveTopology},
    render_asset::RenderAssetUsages,
};
use glam::Vec3;
use itertools::Itertools;

use crate::mesh::iterators::FaceIterators;
use crate::mesh::{SMesh, SMeshResult, VertexId};

/// A classic indexed triangle-list representation, one entry per
/// (duplicated) triangle corner — the layout `bevy::render::mesh::Mesh`
/// wants.
#[derive(Clone, Debug, Default)]
pub struct VertexIndexBuffers {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl SMesh {
    fn to_buffers(&self) -> SMeshResult<VertexIndexBuffers> {
        let mut positions = Vec::new();
        let mut normals = Vec::new();

        for face_id in self.faces() {
            let face_normal = self.face_normals.as_ref().map(|n| n[face_id]);
            let vertices: Vec<VertexId> = face_id.vertices(self).collect();
            let v0 = vertices[0];

            for (&v1, &v2) in vertices[1..].iter().tuple_windows() {
                positions.push(self.positions[v0]);
                positions.push(self.positions[v1]);
                positions.push(self.positions[v2]);

                if let Some(normal) = face_normal {
                    normals.push(normal);
                    normals.push(normal);
                    normals.push(normal);
                }
            }
        }

        Ok(VertexIndexBuffers {
            indices: (0u32..positions.len() as u32).collect(),
            positions,
            normals,
        })
    }
}

impl From<SMesh> for Mesh {
    fn from(smesh: SMesh) -> Self {
        let buffers = smesh.to_buffers().expect("mesh invariant violated");
        let vertex_count = buffers.positions.len();

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, buffers.positions)
        .with_inserted_indices(Indices::U32(buffers.indices));

        if buffers.normals.len() == vertex_count {
            mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, buffers.normals);
        }
        mesh
    }
}
