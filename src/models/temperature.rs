use serde::{Deserialize, Serialize};

/// Seasonal temperature bucket attached to a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Temperature {
    Summer,
    MidSeason,
    Winter,
}

impl Temperature {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Temperature::Summer => "summer",
            Temperature::MidSeason => "mid-season",
            Temperature::Winter => "winter",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "summer" => Some(Temperature::Summer),
            "mid-season" => Some(Temperature::MidSeason),
            "winter" => Some(Temperature::Winter),
            _ => None,
        }
    }

    /// Bucket a measured temperature (°C) into a seasonal band.
    pub fn from_celsius(deg: f64) -> Self {
        if deg >= 25.0 {
            Temperature::Summer
        } else if deg >= 12.0 {
            Temperature::MidSeason
        } else {
            Temperature::Winter
        }
    }
}
