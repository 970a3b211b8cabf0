//! Journal-side domain types: daily moods, goal horizons and media kinds.

use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed moods a day can be tagged with.
///
/// Ordered from most tense to most energetic; `None` is the neutral mood a
/// day shows when nothing was recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Stressed,
    Sad,
    #[default]
    None,
    Calm,
    Happy,
    Energetic,
}

impl Mood {
    pub const ALL: [Mood; 6] = [Mood::Stressed, Mood::Sad, Mood::None, Mood::Calm, Mood::Happy, Mood::Energetic];

    pub fn id(&self) -> &'static str {
        match self {
            Mood::Stressed => "stressed",
            Mood::Sad => "sad",
            Mood::None => "none",
            Mood::Calm => "calm",
            Mood::Happy => "happy",
            Mood::Energetic => "energetic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Stressed => "Stressed",
            Mood::Sad => "Sad",
            Mood::None => "Neutral",
            Mood::Calm => "Calm",
            Mood::Happy => "Happy",
            Mood::Energetic => "Energetic",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.id() == wanted)
            .ok_or_else(|| ValidationError::UnknownMood(s.to_string()))
    }
}

/// Time horizon of a goal. Goals are not tied to a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GoalHorizon {
    OneWeek,
    OneMonth,
    SixMonths,
    OneYear,
}

impl GoalHorizon {
    pub const ALL: [GoalHorizon; 4] = [GoalHorizon::OneWeek, GoalHorizon::OneMonth, GoalHorizon::SixMonths, GoalHorizon::OneYear];

    /// Storage identifier.
    pub fn id(&self) -> &'static str {
        match self {
            GoalHorizon::OneWeek => "1week",
            GoalHorizon::OneMonth => "1month",
            GoalHorizon::SixMonths => "6month",
            GoalHorizon::OneYear => "1year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalHorizon::OneWeek => "1 Week Goal",
            GoalHorizon::OneMonth => "1 Month Goal",
            GoalHorizon::SixMonths => "6 Month Goal",
            GoalHorizon::OneYear => "1 Year Goal",
        }
    }
}

impl fmt::Display for GoalHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GoalHorizon {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        GoalHorizon::ALL
            .into_iter()
            .find(|h| h.id() == wanted)
            .ok_or_else(|| ValidationError::UnknownGoalHorizon(s.to_string()))
    }
}

/// Which journal media collection a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Audio,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Audio => "audio",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "image" | "images" => Ok(MediaKind::Image),
            "audio" | "audios" => Ok(MediaKind::Audio),
            _ => Err(ValidationError::UnknownMediaKind(s.to_string())),
        }
    }
}
