use std::f32::consts::FRAC_PI_2;

use crate::precondition::{PreconditionError, PreconditionResult};

/// Thresholds for [`crate::orient::orient_normals_via_mst`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientOptions {
    /// θ_max: a propagated normal keeps `is_oriented` only while every edge
    /// on its path from the root stayed within this angle of its source.
    pub max_propagation_angle: f32,
}

impl Default for OrientOptions {
    fn default() -> Self {
        Self {
            max_propagation_angle: FRAC_PI_2,
        }
    }
}

impl OrientOptions {
    pub fn validate(&self) -> PreconditionResult<()> {
        if !(self.max_propagation_angle > 0.0 && self.max_propagation_angle <= FRAC_PI_2) {
            return Err(PreconditionError::AngleOutOfRange(
                self.max_propagation_angle,
            ));
        }
        Ok(())
    }
}
