use crate::models::{MissType, Shot};
use std::collections::BTreeMap;

/// Course name placeholder written when nothing was resolved or entered;
/// excluded from every distinct-value listing.
pub const UNKNOWN_COURSE: &str = "unknown";

/// Mean target distance over shots with a positive recorded distance.
/// Shots with no distance (or a zero/negative one) count in neither the
/// numerator nor the denominator. 0 when nothing is eligible.
pub fn average_distance<'a, I>(shots: I) -> f64
where
    I: IntoIterator<Item = &'a Shot>,
{
    let mut sum = 0i64;
    let mut n = 0u32;

    for shot in shots {
        if let Some(d) = shot.distance
            && d > 0
        {
            sum += d;
            n += 1;
        }
    }

    if n == 0 {
        return 0.0;
    }
    sum as f64 / n as f64
}

/// Shots per miss label, ignoring shots with a coordinate result.
pub fn miss_tally<'a, I>(shots: I) -> BTreeMap<MissType, usize>
where
    I: IntoIterator<Item = &'a Shot>,
{
    let mut tally = BTreeMap::new();

    for shot in shots {
        if let Some(miss) = shot.miss_type {
            *tally.entry(miss).or_insert(0) += 1;
        }
    }
    tally
}

/// Distinct course names, sentinel-free and sorted for stable display.
pub fn unique_courses<'a, I>(shots: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Shot>,
{
    let mut courses: Vec<String> = shots
        .into_iter()
        .filter_map(|s| s.golf_course.as_deref())
        .filter(|c| !c.trim().is_empty() && *c != UNKNOWN_COURSE)
        .map(|c| c.to_string())
        .collect();

    courses.sort();
    courses.dedup();
    courses
}
