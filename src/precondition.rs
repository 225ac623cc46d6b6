//! The precondition-violation error shared by both surface operations.
//!
//! Grounded on the teacher's [`crate::mesh::SMeshError`] (`thiserror`-derived,
//! one variant per bad-input shape) but kept separate from it: a
//! [`SMeshError`](crate::mesh::SMeshError) means the half-edge arena itself
//! is inconsistent, while a [`PreconditionError`] means the caller handed
//! `repair_almost_degenerate_faces` or `orient_normals_via_mst` an argument
//! the operation was never meant to tolerate. Both are programming errors,
//! not recoverable runtime conditions, so callers are expected to fail fast
//! rather than match on variants in steady-state code.

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PreconditionError {
    #[error("k must be at least 2, got {0}")]
    KTooSmall(usize),
    #[error("max_propagation_angle must be in (0, pi/2], got {0}")]
    AngleOutOfRange(f32),
    #[error("needle_ratio must be positive, got {0}")]
    NeedleRatioOutOfRange(f32),
    #[error("cap_angle_cosine must be in [-1, 1], got {0}")]
    CapAngleCosineOutOfRange(f32),
    #[error("collapse_length_max must be non-negative, got {0}")]
    CollapseLengthMaxOutOfRange(f32),
    #[error("input is empty")]
    EmptyInput,
    #[error("input mesh is not manifold")]
    NonManifoldInput,
}

pub type PreconditionResult<T> = Result<T, PreconditionError>;
