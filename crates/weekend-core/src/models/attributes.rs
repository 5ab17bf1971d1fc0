//! Attribute enumerations for catalog activities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of activity categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Food and dining
    Food,

    /// Outdoor activities
    Outdoor,

    /// Entertainment
    Entertainment,

    /// Wellness and self-care
    Wellness,

    /// Social gatherings
    Social,

    /// Arts and culture
    Culture,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "outdoor" => Ok(Category::Outdoor),
            "entertainment" => Ok(Category::Entertainment),
            "wellness" => Ok(Category::Wellness),
            "social" => Ok(Category::Social),
            "culture" => Ok(Category::Culture),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

impl Category {
    /// Convert to the lowercase string representation used in persisted
    /// state and filter queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Outdoor => "outdoor",
            Category::Entertainment => "entertainment",
            Category::Wellness => "wellness",
            Category::Social => "social",
            Category::Culture => "culture",
        }
    }
}

/// Type-safe enumeration of activity moods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// High-energy activities
    Energetic,

    /// Low-key activities
    Relaxed,

    /// Activities best enjoyed with company
    Social,

    /// Activities with a sense of adventure
    Adventurous,
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "energetic" => Ok(Mood::Energetic),
            "relaxed" => Ok(Mood::Relaxed),
            "social" => Ok(Mood::Social),
            "adventurous" => Ok(Mood::Adventurous),
            _ => Err(format!("Invalid mood: {s}")),
        }
    }
}

impl Mood {
    /// Convert to the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energetic => "energetic",
            Mood::Relaxed => "relaxed",
            Mood::Social => "social",
            Mood::Adventurous => "adventurous",
        }
    }
}

/// Type-safe enumeration of price tiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    /// Costs nothing
    Free,

    /// Roughly $25 per person
    Low,

    /// Roughly $75 per person
    Medium,

    /// Roughly $150 per person
    High,
}

impl FromStr for CostTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(CostTier::Free),
            "low" => Ok(CostTier::Low),
            "medium" => Ok(CostTier::Medium),
            "high" => Ok(CostTier::High),
            _ => Err(format!("Invalid cost tier: {s}")),
        }
    }
}

impl CostTier {
    /// Convert to the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CostTier::Free => "free",
            CostTier::Low => "low",
            CostTier::Medium => "medium",
            CostTier::High => "high",
        }
    }

    /// Fixed dollar estimate for this tier, used by the plan cost aggregate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use weekend_core::models::CostTier;
    ///
    /// assert_eq!(CostTier::Free.estimate(), 0);
    /// assert_eq!(CostTier::Low.estimate(), 25);
    /// assert_eq!(CostTier::Medium.estimate(), 75);
    /// assert_eq!(CostTier::High.estimate(), 150);
    /// ```
    pub fn estimate(&self) -> u32 {
        match self {
            CostTier::Free => 0,
            CostTier::Low => 25,
            CostTier::Medium => 75,
            CostTier::High => 150,
        }
    }
}

/// Type-safe enumeration of preferred times of day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Morning activities
    Morning,

    /// Afternoon activities
    Afternoon,

    /// Evening activities
    Evening,

    /// Fits any time slot
    #[default]
    Any,
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            "any" => Ok(TimeOfDay::Any),
            _ => Err(format!("Invalid time of day: {s}")),
        }
    }
}

impl TimeOfDay {
    /// Convert to the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Any => "any",
        }
    }
}
