//! Activity model definition.

use serde::{Deserialize, Serialize};

use super::{Category, CostTier, Mood, TimeOfDay};

/// A named place an activity happens at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// Human-readable venue name
    pub name: String,

    /// Street address
    pub address: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// An immutable activity definition from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Unique identifier for the activity
    pub id: String,

    /// Display name of the activity
    pub name: String,

    /// Broad category the activity belongs to
    pub category: Category,

    /// How long the activity takes, in hours (always positive)
    pub duration: f64,

    /// Short description shown in the browser
    pub description: String,

    /// Image URI for the activity card
    pub image: String,

    /// The mood the activity fits
    pub mood: Mood,

    /// Price tier for cost estimation
    pub cost: CostTier,

    /// Preferred time of day, or `Any`
    pub time_of_day: TimeOfDay,

    /// Optional venue, present for map-eligible activities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}
