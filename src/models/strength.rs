use serde::Serialize;

/// Swing strength chosen for the shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strength {
    Full,
    Normal,
    Soft,
}

impl Strength {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Strength::Full => "full",
            Strength::Normal => "normal",
            Strength::Soft => "soft",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "full" => Some(Strength::Full),
            "normal" => Some(Strength::Normal),
            "soft" => Some(Strength::Soft),
            _ => None,
        }
    }
}
