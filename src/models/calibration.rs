use serde::{Deserialize, Serialize};

/// Device tilt captured while the phone rested flat on the ground.
/// Subtracted from every raw reading before classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub x_offset: f64,
    pub y_offset: f64,
    pub z_offset: f64,
    /// Epoch milliseconds of the calibration run.
    pub captured_at: i64,
}

impl Calibration {
    /// Neutral calibration, used when the user has never calibrated.
    pub fn zero() -> Self {
        Self {
            x_offset: 0.0,
            y_offset: 0.0,
            z_offset: 0.0,
            captured_at: 0,
        }
    }
}
