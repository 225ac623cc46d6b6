use glam::Vec3;
use itertools::Itertools;
use slotmap::SecondaryMap;

use crate::mesh::iterators::FaceIterators;
use crate::mesh::query::VertexOps;
use crate::mesh::{SMesh, SMeshResult};

impl SMesh {
    /// Recomputes per-face and per-vertex normals from scratch by
    /// area-weighted accumulation of each face's (first-three-vertices)
    /// normal into its incident vertices. Direct port of the teacher's
    /// `recalculate_normals` (`src/smesh/util.rs`).
    pub fn recalculate_normals(&mut self) -> SMeshResult<()> {
        let mut vertex_normals: SecondaryMap<_, Vec3> = SecondaryMap::default();
        for v in self.vertices() {
            vertex_normals.insert(v, Vec3::ZERO);
        }
        let mut face_normals: SecondaryMap<_, Vec3> = SecondaryMap::default();

        for face in self.faces() {
            let verts = face.vertices(self).collect_vec();
            let p0 = verts[0].position(self)?;
            let p1 = verts[1].position(self)?;
            let p2 = verts[2].position(self)?;
            let normal = (p1 - p0).cross(p2 - p0).normalize_or_zero();
            face_normals.insert(face, normal);
            for v in verts {
                vertex_normals[v] += normal;
            }
        }

        for (_, n) in vertex_normals.iter_mut() {
            *n = n.normalize_or_zero();
        }

        self.vertex_normals = Some(vertex_normals);
        self.face_normals = Some(face_normals);
        Ok(())
    }

    pub fn flip_normals(&mut self) {
        if let Some(face_normals) = &mut self.face_normals {
            for (_, n) in face_normals.iter_mut() {
                *n = -*n;
            }
        }
        if let Some(vertex_normals) = &mut self.vertex_normals {
            for (_, n) in vertex_normals.iter_mut() {
                *n = -*n;
            }
        }
    }
}
