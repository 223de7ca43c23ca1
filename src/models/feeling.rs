use serde::Serialize;

/// Player's own judgement of the strike, recorded optionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feeling {
    Great,
    Good,
    Normal,
    Bad,
    Unsure,
}

impl Feeling {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Feeling::Great => "great",
            Feeling::Good => "good",
            Feeling::Normal => "normal",
            Feeling::Bad => "bad",
            Feeling::Unsure => "unsure",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "great" => Some(Feeling::Great),
            "good" => Some(Feeling::Good),
            "normal" => Some(Feeling::Normal),
            "bad" => Some(Feeling::Bad),
            "unsure" => Some(Feeling::Unsure),
            _ => None,
        }
    }
}
