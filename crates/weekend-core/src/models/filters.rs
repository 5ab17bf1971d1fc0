//! Filter types for browsing the activity catalog.

use super::{Activity, Category, CostTier, Mood, TimeOfDay};

/// Filter options for browsing catalog activities.
///
/// Every field is optional; an empty filter matches everything. Filtering is
/// a pure predicate over catalog fields, so callers can re-run it on every
/// render.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    /// Case-insensitive free-text match over name and description
    pub search: Option<String>,

    /// Filter by category
    pub category: Option<Category>,

    /// Filter by mood
    pub mood: Option<Mood>,

    /// Filter by price tier
    pub cost: Option<CostTier>,

    /// Filter by preferred time of day; activities marked
    /// [`TimeOfDay::Any`] match every requested slot
    pub time_of_day: Option<TimeOfDay>,
}

impl ActivityFilter {
    /// Create a filter matching a free-text query only.
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Self::default()
        }
    }

    /// Whether the given activity passes every set criterion.
    pub fn matches(&self, activity: &Activity) -> bool {
        let matches_search = self.search.as_deref().map_or(true, |query| {
            let query = query.to_lowercase();
            activity.name.to_lowercase().contains(&query)
                || activity.description.to_lowercase().contains(&query)
        });
        let matches_category = self.category.map_or(true, |c| activity.category == c);
        let matches_mood = self.mood.map_or(true, |m| activity.mood == m);
        let matches_cost = self.cost.map_or(true, |c| activity.cost == c);
        let matches_time = self.time_of_day.map_or(true, |slot| {
            activity.time_of_day == slot || activity.time_of_day == TimeOfDay::Any
        });

        matches_search && matches_category && matches_mood && matches_cost && matches_time
    }
}
