//! Capture step sequencing.
//!
//! The capture flow walks a fixed step order, but users can disable fields
//! they never record; navigation jumps to the nearest enabled step instead
//! of assuming the sequence is contiguous.

use serde::{Deserialize, Serialize};

/// Capture steps in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStep {
    Slope,
    Lie,
    Club,
    Strength,
    Wind,
    Result,
}

impl CaptureStep {
    pub fn name(&self) -> &'static str {
        match self {
            CaptureStep::Slope => "slope",
            CaptureStep::Lie => "lie",
            CaptureStep::Club => "club",
            CaptureStep::Strength => "strength",
            CaptureStep::Wind => "wind",
            CaptureStep::Result => "result",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "slope" => Some(CaptureStep::Slope),
            "lie" => Some(CaptureStep::Lie),
            "club" => Some(CaptureStep::Club),
            "strength" => Some(CaptureStep::Strength),
            "wind" => Some(CaptureStep::Wind),
            "result" => Some(CaptureStep::Result),
            _ => None,
        }
    }
}

pub const CAPTURE_ORDER: [CaptureStep; 6] = [
    CaptureStep::Slope,
    CaptureStep::Lie,
    CaptureStep::Club,
    CaptureStep::Strength,
    CaptureStep::Wind,
    CaptureStep::Result,
];

/// Per-field enable switches, stored under the `enabled_fields` setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldToggles {
    pub slope: bool,
    pub lie: bool,
    pub club: bool,
    pub strength: bool,
    pub wind: bool,
    pub result: bool,
}

impl Default for FieldToggles {
    fn default() -> Self {
        Self {
            slope: true,
            lie: true,
            club: true,
            strength: true,
            wind: true,
            result: true,
        }
    }
}

impl FieldToggles {
    pub fn enabled(&self, step: CaptureStep) -> bool {
        match step {
            CaptureStep::Slope => self.slope,
            CaptureStep::Lie => self.lie,
            CaptureStep::Club => self.club,
            CaptureStep::Strength => self.strength,
            CaptureStep::Wind => self.wind,
            CaptureStep::Result => self.result,
        }
    }

    pub fn set_enabled(&mut self, step: CaptureStep, value: bool) {
        match step {
            CaptureStep::Slope => self.slope = value,
            CaptureStep::Lie => self.lie = value,
            CaptureStep::Club => self.club = value,
            CaptureStep::Strength => self.strength = value,
            CaptureStep::Wind => self.wind = value,
            CaptureStep::Result => self.result = value,
        }
    }
}

fn position(step: CaptureStep) -> usize {
    CAPTURE_ORDER.iter().position(|s| *s == step).unwrap_or(0)
}

/// First enabled step of the flow, if any field is enabled at all.
pub fn first_enabled(toggles: &FieldToggles) -> Option<CaptureStep> {
    CAPTURE_ORDER.iter().copied().find(|s| toggles.enabled(*s))
}

/// Nearest enabled step after `current`.
pub fn next_enabled(current: CaptureStep, toggles: &FieldToggles) -> Option<CaptureStep> {
    CAPTURE_ORDER
        .iter()
        .copied()
        .skip(position(current) + 1)
        .find(|s| toggles.enabled(*s))
}

/// Nearest enabled step before `current`.
pub fn prev_enabled(current: CaptureStep, toggles: &FieldToggles) -> Option<CaptureStep> {
    CAPTURE_ORDER
        .iter()
        .copied()
        .take(position(current))
        .rev()
        .find(|s| toggles.enabled(*s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_skips_disabled_steps() {
        let toggles = FieldToggles {
            lie: false,
            strength: false,
            ..FieldToggles::default()
        };

        assert_eq!(
            next_enabled(CaptureStep::Slope, &toggles),
            Some(CaptureStep::Club)
        );
        assert_eq!(
            next_enabled(CaptureStep::Club, &toggles),
            Some(CaptureStep::Wind)
        );
        assert_eq!(
            prev_enabled(CaptureStep::Wind, &toggles),
            Some(CaptureStep::Club)
        );
        assert_eq!(
            prev_enabled(CaptureStep::Club, &toggles),
            Some(CaptureStep::Slope)
        );
    }

    #[test]
    fn ends_of_the_flow() {
        let toggles = FieldToggles::default();
        assert_eq!(prev_enabled(CaptureStep::Slope, &toggles), None);
        assert_eq!(next_enabled(CaptureStep::Result, &toggles), None);
        assert_eq!(first_enabled(&toggles), Some(CaptureStep::Slope));
    }

    #[test]
    fn disabled_leading_step_moves_the_entry_point() {
        let toggles = FieldToggles {
            slope: false,
            ..FieldToggles::default()
        };
        assert_eq!(first_enabled(&toggles), Some(CaptureStep::Lie));
        assert_eq!(prev_enabled(CaptureStep::Club, &toggles), Some(CaptureStep::Lie));
    }
}
