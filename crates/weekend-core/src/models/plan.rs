//! Weekend plan snapshot model.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ScheduledActivity;

/// Type-safe enumeration of weekend themes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Slow mornings and low-effort plans
    #[default]
    Lazy,

    /// Get out and do something
    Adventurous,

    /// Plans the whole family can join
    Family,

    /// A weekend for two
    Romantic,

    /// Museums, galleries, and shows
    Cultural,
}

impl FromStr for ThemeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lazy" => Ok(ThemeKind::Lazy),
            "adventurous" => Ok(ThemeKind::Adventurous),
            "family" => Ok(ThemeKind::Family),
            "romantic" => Ok(ThemeKind::Romantic),
            "cultural" => Ok(ThemeKind::Cultural),
            _ => Err(format!("Invalid theme: {s}")),
        }
    }
}

impl ThemeKind {
    /// Convert to the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Lazy => "lazy",
            ThemeKind::Adventurous => "adventurous",
            ThemeKind::Family => "family",
            ThemeKind::Romantic => "romantic",
            ThemeKind::Cultural => "cultural",
        }
    }
}

/// An immutable, named snapshot of the weekend at the moment it was saved.
///
/// Produced by the store's save-plan operation; never fed back into the live
/// scheduled list. The saturday and sunday lists hold only placed entries,
/// time-sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekendPlan {
    /// Unique identifier (millisecond timestamp at save time)
    pub id: String,

    /// User-supplied name for the plan
    pub name: String,

    /// Theme selected when the plan was saved
    pub theme: ThemeKind,

    /// Saturday activities in chronological order
    pub saturday: Vec<ScheduledActivity>,

    /// Sunday activities in chronological order
    pub sunday: Vec<ScheduledActivity>,

    /// Timestamp when the plan was saved (UTC)
    pub created_at: Timestamp,
}
