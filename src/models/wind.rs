use serde::{Serialize, Serializer};

/// Wind direction relative to the target line (up = into the shot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindDirection {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl WindDirection {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            WindDirection::Up => "up",
            WindDirection::Down => "down",
            WindDirection::Left => "left",
            WindDirection::Right => "right",
            WindDirection::UpLeft => "up-left",
            WindDirection::UpRight => "up-right",
            WindDirection::DownLeft => "down-left",
            WindDirection::DownRight => "down-right",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "up" => Some(WindDirection::Up),
            "down" => Some(WindDirection::Down),
            "left" => Some(WindDirection::Left),
            "right" => Some(WindDirection::Right),
            "up-left" => Some(WindDirection::UpLeft),
            "up-right" => Some(WindDirection::UpRight),
            "down-left" => Some(WindDirection::DownLeft),
            "down-right" => Some(WindDirection::DownRight),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindLevel {
    Weak,
    Strong,
}

impl WindLevel {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            WindLevel::Weak => "weak",
            WindLevel::Strong => "strong",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "weak" => Some(WindLevel::Weak),
            "strong" => Some(WindLevel::Strong),
            _ => None,
        }
    }
}

/// Wind at capture time: calm, or a direction/level pair.
/// Serialized as `none` or `{direction}-{level}` (e.g. `up-left-strong`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wind {
    None,
    Blowing(WindDirection, WindLevel),
}

// Exports carry the same string vocabulary the DB uses.
impl Serialize for Wind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_db_str())
    }
}

impl Wind {
    pub fn to_db_str(&self) -> String {
        match self {
            Wind::None => "none".to_string(),
            Wind::Blowing(dir, level) => {
                format!("{}-{}", dir.to_db_str(), level.to_db_str())
            }
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        if s == "none" {
            return Some(Wind::None);
        }

        // The level is always the last dash-separated token; the direction
        // itself may contain a dash (`up-left`).
        let (dir_str, level_str) = s.rsplit_once('-')?;
        let dir = WindDirection::from_db_str(dir_str)?;
        let level = WindLevel::from_db_str(level_str)?;

        Some(Wind::Blowing(dir, level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_direction_round_trips() {
        let w = Wind::Blowing(WindDirection::UpLeft, WindLevel::Strong);
        assert_eq!(w.to_db_str(), "up-left-strong");
        assert_eq!(Wind::from_db_str("up-left-strong"), Some(w));
    }

    #[test]
    fn none_and_garbage() {
        assert_eq!(Wind::from_db_str("none"), Some(Wind::None));
        assert_eq!(Wind::from_db_str("sideways-strong"), None);
        assert_eq!(Wind::from_db_str("up"), None);
    }
}
