use crate::models::{Feeling, Lie, Shot, Slope, Strength, Temperature, Wind};
use std::collections::HashSet;

/// Multi-select filter over the shot collection.
///
/// Each category holds a set of accepted values: a shot passes when, for
/// every non-empty set, its value for that category is a member (AND across
/// categories, OR within one). An empty set means "no constraint", never
/// "reject all".
#[derive(Debug, Clone, Default)]
pub struct ShotFilter {
    pub slopes: HashSet<Slope>,
    pub clubs: HashSet<String>,
    pub lies: HashSet<Lie>,
    pub strengths: HashSet<Strength>,
    pub winds: HashSet<Wind>,
    pub temperatures: HashSet<Temperature>,
    pub feelings: HashSet<Feeling>,
    pub courses: HashSet<String>,
}

impl ShotFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.slopes.is_empty()
            && self.clubs.is_empty()
            && self.lies.is_empty()
            && self.strengths.is_empty()
            && self.winds.is_empty()
            && self.temperatures.is_empty()
            && self.feelings.is_empty()
            && self.courses.is_empty()
    }

    pub fn matches(&self, shot: &Shot) -> bool {
        if !self.slopes.is_empty() && !self.slopes.contains(&shot.slope) {
            return false;
        }
        if !self.clubs.is_empty() && !self.clubs.contains(&shot.club) {
            return false;
        }
        if !self.lies.is_empty() && !self.lies.contains(&shot.lie) {
            return false;
        }
        if !self.strengths.is_empty() && !self.strengths.contains(&shot.strength) {
            return false;
        }
        if !self.winds.is_empty() && !self.winds.contains(&shot.wind) {
            return false;
        }
        if !self.temperatures.is_empty() && !self.temperatures.contains(&shot.temperature) {
            return false;
        }
        // Optional categories: a missing value cannot satisfy a constraint.
        if !self.feelings.is_empty() {
            match shot.feeling {
                Some(f) if self.feelings.contains(&f) => {}
                _ => return false,
            }
        }
        if !self.courses.is_empty() {
            match &shot.golf_course {
                Some(c) if self.courses.contains(c) => {}
                _ => return false,
            }
        }
        true
    }

    /// Filtered view preserving the input order.
    pub fn apply<'a>(&self, shots: &'a [Shot]) -> Vec<&'a Shot> {
        shots.iter().filter(|s| self.matches(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Landing;

    fn shot(club: &str, lie: Lie) -> Shot {
        Shot {
            id: 1,
            date: "2024-06-01T10:00:00+09:00".into(),
            created_at: 1,
            slope: Slope::Flat,
            club: club.into(),
            lie,
            strength: Strength::Full,
            wind: Wind::None,
            temperature: Temperature::Summer,
            result: Some(Landing::new(0.0, 0.0).unwrap()),
            miss_type: None,
            distance: Some(150),
            feeling: None,
            memo: None,
            golf_course: None,
            actual_temperature: None,
            latitude: None,
            longitude: None,
            manual_location: false,
        }
    }

    #[test]
    fn or_within_category_and_across_categories() {
        let s = shot("7I", Lie::Normal);

        let mut f = ShotFilter::new();
        f.clubs.insert("7I".into());
        f.clubs.insert("9I".into());
        // lie set left empty: no constraint.
        assert!(f.matches(&s));

        let mut f = ShotFilter::new();
        f.clubs.insert("9I".into());
        assert!(!f.matches(&s));

        let mut f = ShotFilter::new();
        f.clubs.insert("7I".into());
        f.lies.insert(Lie::Bunker);
        assert!(!f.matches(&s));
    }

    #[test]
    fn empty_filter_accepts_everything() {
        let f = ShotFilter::new();
        assert!(f.is_unconstrained());
        assert!(f.matches(&shot("PT", Lie::AGrade)));
    }

    #[test]
    fn missing_optional_value_fails_its_constraint() {
        let s = shot("7I", Lie::Normal); // feeling: None, golf_course: None

        let mut f = ShotFilter::new();
        f.feelings.insert(Feeling::Good);
        assert!(!f.matches(&s));

        let mut f = ShotFilter::new();
        f.courses.insert("Lakeside GC".into());
        assert!(!f.matches(&s));
    }
}
