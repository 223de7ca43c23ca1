use crate::models::Landing;
use serde::Serialize;

/// Radius within which a shot counts as holed-out tight ("just").
pub const JUST_RADIUS_YDS: f64 = 5.0;

/// Radius within which a shot still counts as on target.
pub const ON_TARGET_RADIUS_YDS: f64 = 10.0;

/// Longitudinal error beyond which a long/short miss becomes a "big" one.
pub const BIG_MISS_YDS: f64 = 10.0;

/// Discrete outcome taxonomy shared by coordinate results and legacy
/// category-only records, so both generations can be compared on one scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Just,
    OnTarget,
    Long,
    BigLong,
    Short,
    BigShort,
}

impl Outcome {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Outcome::Just => "just",
            Outcome::OnTarget => "on-target",
            Outcome::Long => "long",
            Outcome::BigLong => "big-long",
            Outcome::Short => "short",
            Outcome::BigShort => "big-short",
        }
    }
}

/// Derive the outcome label for a coordinate result from its radial distance
/// and the sign of the longitudinal error.
pub fn categorize_result(landing: &Landing) -> Outcome {
    let r = landing.radius();

    if r <= JUST_RADIUS_YDS {
        return Outcome::Just;
    }
    if r <= ON_TARGET_RADIUS_YDS {
        return Outcome::OnTarget;
    }

    if landing.y() >= 0.0 {
        if landing.y() > BIG_MISS_YDS {
            Outcome::BigLong
        } else {
            Outcome::Long
        }
    } else if -landing.y() > BIG_MISS_YDS {
        Outcome::BigShort
    } else {
        Outcome::Short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landing(x: f64, y: f64) -> Landing {
        Landing::new(x, y).unwrap()
    }

    #[test]
    fn radial_bands() {
        assert_eq!(categorize_result(&landing(3.0, 4.0)), Outcome::Just);
        assert_eq!(categorize_result(&landing(6.0, 8.0)), Outcome::OnTarget);
        assert_eq!(categorize_result(&landing(0.0, 5.0)), Outcome::Just);
    }

    #[test]
    fn long_and_short_split_on_y_sign() {
        assert_eq!(categorize_result(&landing(12.0, 8.0)), Outcome::Long);
        assert_eq!(categorize_result(&landing(12.0, -8.0)), Outcome::Short);
        // Pure lateral miss counts on the long side.
        assert_eq!(categorize_result(&landing(15.0, 0.0)), Outcome::Long);
    }

    #[test]
    fn big_variants_past_the_band() {
        assert_eq!(categorize_result(&landing(0.0, 25.0)), Outcome::BigLong);
        assert_eq!(categorize_result(&landing(0.0, -25.0)), Outcome::BigShort);
        assert_eq!(categorize_result(&landing(0.0, 10.5)), Outcome::BigLong);
    }
}
