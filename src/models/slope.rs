use serde::Serialize;

/// Lateral tilt component of a stance reading (ball above/below feet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LateralTilt {
    LeftUp,
    LeftDown,
}

/// Longitudinal tilt component of a stance reading (toe up/down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongitudinalTilt {
    ToeUp,
    ToeDown,
}

/// Ground tilt at address, one of 9 discrete categories.
/// Compound categories name the lateral component first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slope {
    Flat,
    LeftUp,
    LeftDown,
    ToeUp,
    ToeDown,
    LeftUpToeUp,
    LeftUpToeDown,
    LeftDownToeUp,
    LeftDownToeDown,
}

impl Slope {
    /// Build a category from the per-axis components fired by the classifier.
    pub fn compose(lateral: Option<LateralTilt>, longitudinal: Option<LongitudinalTilt>) -> Self {
        match (lateral, longitudinal) {
            (None, None) => Slope::Flat,
            (Some(LateralTilt::LeftUp), None) => Slope::LeftUp,
            (Some(LateralTilt::LeftDown), None) => Slope::LeftDown,
            (None, Some(LongitudinalTilt::ToeUp)) => Slope::ToeUp,
            (None, Some(LongitudinalTilt::ToeDown)) => Slope::ToeDown,
            (Some(LateralTilt::LeftUp), Some(LongitudinalTilt::ToeUp)) => Slope::LeftUpToeUp,
            (Some(LateralTilt::LeftUp), Some(LongitudinalTilt::ToeDown)) => Slope::LeftUpToeDown,
            (Some(LateralTilt::LeftDown), Some(LongitudinalTilt::ToeUp)) => Slope::LeftDownToeUp,
            (Some(LateralTilt::LeftDown), Some(LongitudinalTilt::ToeDown)) => Slope::LeftDownToeDown,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Slope::Flat => "flat",
            Slope::LeftUp => "left-up",
            Slope::LeftDown => "left-down",
            Slope::ToeUp => "toe-up",
            Slope::ToeDown => "toe-down",
            Slope::LeftUpToeUp => "left-up-toe-up",
            Slope::LeftUpToeDown => "left-up-toe-down",
            Slope::LeftDownToeUp => "left-down-toe-up",
            Slope::LeftDownToeDown => "left-down-toe-down",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "flat" => Some(Slope::Flat),
            "left-up" => Some(Slope::LeftUp),
            "left-down" => Some(Slope::LeftDown),
            "toe-up" => Some(Slope::ToeUp),
            "toe-down" => Some(Slope::ToeDown),
            "left-up-toe-up" => Some(Slope::LeftUpToeUp),
            "left-up-toe-down" => Some(Slope::LeftUpToeDown),
            "left-down-toe-up" => Some(Slope::LeftDownToeUp),
            "left-down-toe-down" => Some(Slope::LeftDownToeDown),
            _ => None,
        }
    }
}
