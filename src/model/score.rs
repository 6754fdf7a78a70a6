use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-hole result name. `Unplayed` stands for a hole with no strokes yet.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreLabel {
    Unplayed,
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    Over(u32),
}

impl ScoreLabel {
    /// Label for a played hole. Anything at or under -2 is an eagle or better.
    #[must_use]
    pub fn from_differential(differential: i64) -> Self {
        match differential {
            i64::MIN..=-2 => ScoreLabel::EagleOrBetter,
            -1 => ScoreLabel::Birdie,
            0 => ScoreLabel::Par,
            1 => ScoreLabel::Bogey,
            over => ScoreLabel::Over(u32::try_from(over).unwrap_or(u32::MAX)),
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreLabel::Unplayed => write!(f, "-"),
            ScoreLabel::EagleOrBetter => write!(f, "Eagle"),
            ScoreLabel::Birdie => write!(f, "Birdie"),
            ScoreLabel::Par => write!(f, "Par"),
            ScoreLabel::Bogey => write!(f, "Bogey"),
            ScoreLabel::Over(n) => write!(f, "+{n}"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreResult {
    pub label: ScoreLabel,
    /// `None` while the hole is unplayed.
    pub differential: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTier {
    Excellent,
    Good,
    Neutral,
    Warning,
    Poor,
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorTier::Excellent => "excellent",
            ColorTier::Good => "good",
            ColorTier::Neutral => "neutral",
            ColorTier::Warning => "warning",
            ColorTier::Poor => "poor",
        };
        write!(f, "{name}")
    }
}
