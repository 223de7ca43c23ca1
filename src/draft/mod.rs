//! In-progress shot draft.
//!
//! The draft is an explicit, passed-around value: every update is a pure
//! `with_*` function returning the new draft, so the capture flow can be
//! unit-tested without a UI harness. The draft owns the two invariants the
//! store does not re-check: result/miss mutual exclusivity and slope
//! auto-fill suppression after a manual choice.

pub mod steps;

use crate::errors::{AppError, AppResult};
use crate::models::{
    Feeling, Landing, Lie, MissType, NewShot, Slope, Strength, Temperature, Wind,
};
use serde::{Deserialize, Serialize};

/// Round-level context carried across consecutive drafts, so repeated shots
/// in the same round don't re-collect course and weather every time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub golf_course: Option<String>,
    pub temperature: Option<Temperature>,
    pub actual_temperature: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Context was typed in by hand rather than resolved automatically.
    pub manual_location: bool,
}

/// Required capture fields; the completion gate counts these.
const REQUIRED_FIELDS: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct ShotDraft {
    pub date: Option<String>,
    pub club: Option<String>,
    pub lie: Option<Lie>,
    pub strength: Option<Strength>,
    pub wind: Option<Wind>,
    pub distance: Option<i64>,
    pub feeling: Option<Feeling>,
    pub memo: Option<String>,
    pub context: SessionContext,

    slope: Option<Slope>,
    slope_overridden: bool,
    result: Option<Landing>,
    miss_type: Option<MissType>,
}

impl ShotDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: SessionContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }

    pub fn slope(&self) -> Option<Slope> {
        self.slope
    }

    pub fn result(&self) -> Option<Landing> {
        self.result
    }

    pub fn miss_type(&self) -> Option<MissType> {
        self.miss_type
    }

    /// Explicit user selection. From here on the live sensor reading no
    /// longer touches the slope for this draft's lifetime.
    pub fn with_slope(mut self, slope: Slope) -> Self {
        self.slope = Some(slope);
        self.slope_overridden = true;
        self
    }

    /// Mirror a live classification into the draft. A no-op once the user
    /// has chosen a slope by hand.
    pub fn observe_slope(mut self, live: Slope) -> Self {
        if !self.slope_overridden {
            self.slope = Some(live);
        }
        self
    }

    /// Record a landing offset, clearing any categorical miss.
    pub fn with_result(mut self, landing: Landing) -> Self {
        self.result = Some(landing);
        self.miss_type = None;
        self
    }

    /// Record a categorical miss, clearing any landing offset.
    pub fn with_miss(mut self, miss: MissType) -> Self {
        self.miss_type = Some(miss);
        self.result = None;
        self
    }

    pub fn with_club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into());
        self
    }

    pub fn with_lie(mut self, lie: Lie) -> Self {
        self.lie = Some(lie);
        self
    }

    pub fn with_strength(mut self, strength: Strength) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn with_wind(mut self, wind: Wind) -> Self {
        self.wind = Some(wind);
        self
    }

    fn required_filled(&self) -> usize {
        [
            self.slope.is_some(),
            self.club.is_some(),
            self.lie.is_some(),
            self.strength.is_some(),
            self.wind.is_some(),
        ]
        .iter()
        .filter(|f| **f)
        .count()
    }

    /// Share of required fields already captured, 0..=100.
    pub fn completion_percentage(&self) -> u8 {
        (self.required_filled() * 100 / REQUIRED_FIELDS) as u8
    }

    /// Ready when every required field is set and the outcome is exactly one
    /// of landing offset / miss label.
    pub fn is_ready_to_save(&self) -> bool {
        self.required_filled() == REQUIRED_FIELDS
            && (self.result.is_some() != self.miss_type.is_some())
    }

    fn missing_description(&self) -> String {
        let mut missing = Vec::new();
        if self.slope.is_none() {
            missing.push("slope");
        }
        if self.club.is_none() {
            missing.push("club");
        }
        if self.lie.is_none() {
            missing.push("lie");
        }
        if self.strength.is_none() {
            missing.push("strength");
        }
        if self.wind.is_none() {
            missing.push("wind");
        }
        if self.result.is_none() && self.miss_type.is_none() {
            missing.push("result or miss");
        }
        missing.join(", ")
    }

    /// Finalize into a persistable record. `date` is used when the user
    /// never set an explicit shot time.
    pub fn try_into_new_shot(self, date_fallback: String) -> AppResult<NewShot> {
        if !self.is_ready_to_save() {
            return Err(AppError::DraftIncomplete(self.missing_description()));
        }

        let (Some(slope), Some(club), Some(lie), Some(strength), Some(wind)) = (
            self.slope,
            self.club.clone(),
            self.lie,
            self.strength,
            self.wind,
        ) else {
            return Err(AppError::DraftIncomplete(self.missing_description()));
        };

        Ok(NewShot {
            date: self.date.unwrap_or(date_fallback),
            slope,
            club,
            lie,
            strength,
            wind,
            temperature: self.context.temperature.unwrap_or(Temperature::MidSeason),
            result: self.result,
            miss_type: self.miss_type,
            distance: self.distance,
            feeling: self.feeling,
            memo: self.memo,
            golf_course: self.context.golf_course,
            actual_temperature: self.context.actual_temperature,
            latitude: self.context.latitude,
            longitude: self.context.longitude,
            manual_location: self.context.manual_location,
        })
    }

    /// Fresh draft for the next shot in the same round: shot fields cleared,
    /// session context retained, sensor auto-fill re-armed.
    pub fn reset_for_next(self) -> Self {
        Self::with_context(self.context)
    }
}
