//! The point-cloud record type (§3, §10.4).

use glam::Vec3;

/// A single point of the cloud Core B operates on: a fixed position and a
/// read-writable unit normal of ambiguous sign. A record's index in the
/// owning `Vec<PointRecord>` is its dense integer index (§3) — this crate
/// has no separate external index map to delegate to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRecord {
    pub position: Vec3,
    pub normal: Vec3,
}

impl PointRecord {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}
