use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Attention span used when the work duration field is empty or unusable
pub const DEFAULT_ATTENTION_SPAN: i64 = 60;

/// A fixed time block that the scheduler has to work around
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub subject: String,
    /// Start as entered, e.g. `2026-10-20T09:00`
    pub start: String,
    pub end: String,
}

/// A piece of work for the scheduler to place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub subject: String,
    /// Estimated effort in minutes
    pub estimated: i64,
    /// Due date, `YYYY-MM-DD`
    pub due: String,
    /// Lower is more important
    pub priority: i64,
}

/// Part of the day a student prefers to study in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    /// Label sent to the scheduling service
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
            TimeSlot::Night => "night",
        }
    }

    /// Study hours the scheduling service maps the label to
    pub fn hours(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "09:00-12:00",
            TimeSlot::Afternoon => "12:00-17:00",
            TimeSlot::Evening => "17:00-19:00",
            TimeSlot::Night => "20:00-24:00",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.label() == wanted)
            .ok_or_else(|| s.trim().to_string())
    }
}

/// Study preferences, stored as one object and replaced on every save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub preferred_times: BTreeSet<TimeSlot>,
    pub prefer_breaks: bool,
    /// Minutes of work before a break
    pub attention_span: i64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            preferred_times: BTreeSet::new(),
            prefer_breaks: false,
            attention_span: DEFAULT_ATTENTION_SPAN,
        }
    }
}
