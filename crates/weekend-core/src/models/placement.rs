//! Scheduled-activity model and placement state.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Activity;

/// Type-safe enumeration of weekend days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    /// Saturday
    Saturday,

    /// Sunday
    Sunday,
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saturday" => Ok(Day::Saturday),
            "sunday" => Ok(Day::Sunday),
            _ => Err(format!("Invalid day: {s}")),
        }
    }
}

impl Day {
    /// Convert to the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }
}

/// Where an activity sits in the weekend, if anywhere.
///
/// A freshly added activity is `Unplaced` until the user assigns it a day
/// and time. Placement is an explicit tagged state so that "scheduled yet?"
/// never depends on comparing a timestamp against a capture of "now".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Placement {
    /// Added to the plan but not yet assigned a day or time
    #[default]
    Unplaced,

    /// Assigned to a day at a definite start time
    Placed {
        /// Weekend day the activity is scheduled on
        day: Day,
        /// Absolute start time (UTC)
        time: Timestamp,
    },
}

impl Placement {
    /// Returns the day when placed, `None` otherwise.
    pub fn day(&self) -> Option<Day> {
        match self {
            Placement::Placed { day, .. } => Some(*day),
            Placement::Unplaced => None,
        }
    }

    /// Returns the start time when placed, `None` otherwise.
    pub fn time(&self) -> Option<Timestamp> {
        match self {
            Placement::Placed { time, .. } => Some(*time),
            Placement::Unplaced => None,
        }
    }

    /// True when the activity has a definite day and time.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// An activity the user has added to their weekend, plus its placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledActivity {
    /// The catalog activity this entry was created from
    pub activity: Activity,

    /// Current placement within the weekend
    #[serde(default)]
    pub placement: Placement,
}

impl ScheduledActivity {
    /// Creates an unplaced entry from a catalog activity.
    pub fn new(activity: Activity) -> Self {
        Self {
            activity,
            placement: Placement::Unplaced,
        }
    }

    /// The activity id this entry is keyed by.
    pub fn id(&self) -> &str {
        &self.activity.id
    }
}
