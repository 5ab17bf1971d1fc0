//! Theme and plan-snapshot operations for the scheduling store.

use std::str::FromStr;

use jiff::Timestamp;

use super::WeekendStore;
use crate::models::{Day, ThemeKind, WeekendPlan};
use crate::projections;

impl WeekendStore {
    /// Sets the selected theme id. Independent of the activity list.
    pub fn set_theme(&mut self, theme_id: &str) {
        self.selected_theme = Some(theme_id.to_string());
        self.persist();
    }

    /// Full reset: empties the activity list and clears the selected theme
    /// and any saved plan snapshot.
    pub fn clear_weekend(&mut self) {
        self.scheduled.clear();
        self.current_plan = None;
        self.selected_theme = None;
        self.persist();
    }

    /// Captures the current weekend as an immutable, named [`WeekendPlan`]
    /// snapshot and stores it as the current plan.
    ///
    /// The snapshot partitions placed entries into time-sorted Saturday and
    /// Sunday lists; unplaced entries are not part of either day. The theme
    /// falls back to [`ThemeKind::Lazy`] when unset or unrecognized. The
    /// live scheduled list is not altered.
    pub fn save_plan(&mut self, name: &str) {
        let theme = self
            .selected_theme
            .as_deref()
            .and_then(|id| ThemeKind::from_str(id).ok())
            .unwrap_or_default();
        let now = Timestamp::now();

        let plan = WeekendPlan {
            id: now.as_millisecond().to_string(),
            name: name.to_string(),
            theme,
            saturday: projections::day_activities(&self.scheduled, Day::Saturday)
                .into_iter()
                .cloned()
                .collect(),
            sunday: projections::day_activities(&self.scheduled, Day::Sunday)
                .into_iter()
                .cloned()
                .collect(),
            created_at: now,
        };

        self.current_plan = Some(plan);
        self.persist();
    }
}
