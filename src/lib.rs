//! Almost-degenerate triangle repair and point-cloud normal orientation,
//! built on a half-edge mesh core.
//!
//! Two independent surface operations:
//! - [`repair::repair_almost_degenerate_faces`] iteratively collapses and
//!   flips needle/cap triangles out of a mesh until a fixed point.
//! - [`orient::orient_normals_via_mst`] propagates a globally consistent
//!   sign onto an ambiguously-oriented point cloud's normals.
//!
//! Both are built on the half-edge mesh arena in [`mesh`]; they share no
//! code with each other beyond [`precondition`]'s error type and the
//! `glam`/`tracing` plumbing underneath both.

pub mod mesh;
pub mod orient;
pub mod precondition;
pub mod prelude;
pub mod repair;

#[cfg(feature = "bevy_adapter")]
pub mod adapters;
