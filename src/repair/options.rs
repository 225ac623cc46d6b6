use crate::precondition::{PreconditionError, PreconditionResult};

/// Thresholds for [`crate::repair::repair_almost_degenerate_faces`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairOptions {
    /// *ρ*: a face is a needle if `longest_edge / shortest_edge` exceeds this.
    pub needle_ratio: f32,
    /// *γ*: a face is a cap if some interior angle's cosine is below this.
    pub cap_angle_cosine: f32,
    /// *L*: a needle edge is only collapse-eligible if its length is at most this.
    pub collapse_length_max: f32,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            needle_ratio: 4.0,
            // cos(160 degrees)
            cap_angle_cosine: -0.9396926,
            collapse_length_max: 0.2,
        }
    }
}

impl RepairOptions {
    pub fn validate(&self) -> PreconditionResult<()> {
        if !(self.needle_ratio > 0.0) {
            return Err(PreconditionError::NeedleRatioOutOfRange(self.needle_ratio));
        }
        if !(-1.0..=1.0).contains(&self.cap_angle_cosine) {
            return Err(PreconditionError::CapAngleCosineOutOfRange(
                self.cap_angle_cosine,
            ));
        }
        if !(self.collapse_length_max >= 0.0) {
            return Err(PreconditionError::CollapseLengthMaxOutOfRange(
                self.collapse_length_max,
            ));
        }
        Ok(())
    }
}
