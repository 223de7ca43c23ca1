use serde::Serialize;

/// Qualitative ball-sitting condition at address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lie {
    AGrade,
    Good,
    Normal,
    Bad,
    VeryBad,
    Bunker,
}

impl Lie {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Lie::AGrade => "a-grade",
            Lie::Good => "good",
            Lie::Normal => "normal",
            Lie::Bad => "bad",
            Lie::VeryBad => "very-bad",
            Lie::Bunker => "bunker",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "a-grade" => Some(Lie::AGrade),
            "good" => Some(Lie::Good),
            "normal" => Some(Lie::Normal),
            "bad" => Some(Lie::Bad),
            "very-bad" => Some(Lie::VeryBad),
            "bunker" => Some(Lie::Bunker),
            _ => None,
        }
    }
}
