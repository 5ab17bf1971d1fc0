//! Weekend theme catalog entry.

use serde::{Deserialize, Serialize};

/// A static theme definition from the catalog.
///
/// Themes are read-only configuration for the theme picker; the store only
/// remembers the selected theme id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekendTheme {
    /// Unique identifier, parseable as a [`super::ThemeKind`]
    pub id: String,

    /// Display name of the theme
    pub name: String,

    /// One-line pitch for the theme
    pub description: String,

    /// Accent color (CSS class or hex)
    pub color: String,

    /// Emoji icon shown next to the name
    pub icon: String,

    /// Catalog activity ids that suit this theme
    pub suggested_activities: Vec<String>,
}
