use super::{Feeling, Lie, MissType, Slope, Strength, Temperature, Wind};
use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Largest landing offset the capture UI accepts, in yards from the aim point.
pub const MAX_LANDING_RADIUS_YDS: f64 = 70.0;

/// Signed landing offset from the aim point, in yards.
/// `x` is lateral (+right), `y` is longitudinal (+long).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Landing {
    x: f64,
    y: f64,
}

impl Landing {
    /// Build a landing offset, rejecting points outside the capture radius.
    pub fn new(x: f64, y: f64) -> AppResult<Self> {
        if (x * x + y * y).sqrt() > MAX_LANDING_RADIUS_YDS {
            return Err(AppError::LandingOutOfRange {
                x,
                y,
                max: MAX_LANDING_RADIUS_YDS,
            });
        }
        Ok(Self { x, y })
    }

    /// Rehydrate a stored offset without re-validating the radius.
    /// Rows were validated at capture time; reads must never fail on them.
    pub(crate) fn raw(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Radial distance from the aim point.
    pub fn radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// One recorded golf shot.
///
/// `result` and `miss_type` are mutually exclusive: exactly one of them is
/// set on every persisted row. The draft layer enforces this before save.
#[derive(Debug, Clone, Serialize)]
pub struct Shot {
    pub id: i64,
    /// User-meaningful shot time, RFC3339.
    pub date: String,
    /// Epoch milliseconds of persistence; history ordering key.
    pub created_at: i64,

    pub slope: Slope,
    pub club: String,
    pub lie: Lie,
    pub strength: Strength,
    pub wind: Wind,
    pub temperature: Temperature,

    pub result: Option<Landing>,
    pub miss_type: Option<MissType>,

    /// Target distance in yards.
    pub distance: Option<i64>,
    pub feeling: Option<Feeling>,
    pub memo: Option<String>,

    // Session context, auto-collected or hand-entered.
    pub golf_course: Option<String>,
    pub actual_temperature: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Context above was typed in by hand; candidate for batch correction.
    pub manual_location: bool,
}

impl Shot {
    pub fn has_outcome(&self) -> bool {
        self.result.is_some() != self.miss_type.is_some()
    }
}

/// A shot ready to persist: everything a `Shot` carries except the
/// store-assigned `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewShot {
    pub date: String,
    pub slope: Slope,
    pub club: String,
    pub lie: Lie,
    pub strength: Strength,
    pub wind: Wind,
    pub temperature: Temperature,
    pub result: Option<Landing>,
    pub miss_type: Option<MissType>,
    pub distance: Option<i64>,
    pub feeling: Option<Feeling>,
    pub memo: Option<String>,
    pub golf_course: Option<String>,
    pub actual_temperature: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub manual_location: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_inside_radius() {
        let l = Landing::new(30.0, -40.0).unwrap();
        assert!((l.radius() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn landing_outside_radius_rejected() {
        assert!(matches!(
            Landing::new(50.0, 50.0),
            Err(AppError::LandingOutOfRange { .. })
        ));
        // Exactly on the rim is still accepted.
        assert!(Landing::new(0.0, MAX_LANDING_RADIUS_YDS).is_ok());
    }
}
