use serde::Serialize;

/// Categorical miss label, used when a shot has no measurable landing point.
/// Mutually exclusive with a recorded landing offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissType {
    Top,
    Choro,
    Duff,
    Over,
    Shank,
    Pull,
}

impl MissType {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            MissType::Top => "top",
            MissType::Choro => "choro",
            MissType::Duff => "duff",
            MissType::Over => "over",
            MissType::Shank => "shank",
            MissType::Pull => "pull",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "top" => Some(MissType::Top),
            "choro" => Some(MissType::Choro),
            "duff" => Some(MissType::Duff),
            "over" => Some(MissType::Over),
            "shank" => Some(MissType::Shank),
            "pull" => Some(MissType::Pull),
            _ => None,
        }
    }
}
