//! Slope classification.
//!
//! Turns a calibrated two-axis tilt reading into one of the 9 discrete
//! slope categories. Classification is a pure function of its inputs so it
//! can be tested without a sensor harness.

use crate::models::slope::{LateralTilt, LongitudinalTilt};
use crate::models::{Calibration, Slope};

/// Degrees of tilt on an axis before it counts as sloped ground.
/// The sole tunable controlling classifier sensitivity.
pub const TILT_THRESHOLD_DEG: f64 = 2.0;

/// Classify a raw `(beta, gamma)` reading against a calibration offset.
///
/// The offsets recorded on flat ground are subtracted first; each axis then
/// fires independently when it exceeds [`TILT_THRESHOLD_DEG`], and the two
/// components compose into flat, a single tilt, or a compound category.
pub fn classify(beta: f64, gamma: f64, calibration: &Calibration) -> Slope {
    let x = beta - calibration.x_offset;
    let y = gamma - calibration.y_offset;

    let lateral = if x > TILT_THRESHOLD_DEG {
        Some(LateralTilt::LeftUp)
    } else if x < -TILT_THRESHOLD_DEG {
        Some(LateralTilt::LeftDown)
    } else {
        None
    };

    // Negative gamma means the toe points uphill.
    let longitudinal = if y < -TILT_THRESHOLD_DEG {
        Some(LongitudinalTilt::ToeUp)
    } else if y > TILT_THRESHOLD_DEG {
        Some(LongitudinalTilt::ToeDown)
    } else {
        None
    };

    Slope::compose(lateral, longitudinal)
}
