//! The scheduling store: the single authoritative owner of weekend state.
//!
//! [`WeekendStore`] holds the scheduled-activity list, the selected theme,
//! and the saved plan snapshot, and funnels every mutation through a fixed
//! operation set. All operations are total functions over the current
//! state: unknown ids and invalid indices are silent no-ops, and nothing
//! on the mutation path returns an error.
//!
//! Everything runs synchronously on the caller's thread. Each mutation
//! completes atomically before the next event is processed, so there are
//! no locks or transactions. After each state change the store writes
//! through to its persistence adapter (when configured); a failed write is
//! logged and swallowed so persistence can never block the planning flow.
//!
//! ```rust
//! use weekend_core::{catalog, models::Day, StoreBuilder};
//! use jiff::civil::date;
//! use jiff::tz::TimeZone;
//!
//! # fn example() -> weekend_core::Result<()> {
//! let mut store = StoreBuilder::new().in_memory().build()?;
//!
//! let hike = catalog::activity("sunrise-hike").expect("catalog entry");
//! store.add_activity(hike);
//!
//! let time = date(2026, 8, 29)
//!     .at(9, 0, 0, 0)
//!     .to_zoned(TimeZone::UTC)
//!     .unwrap()
//!     .timestamp();
//! store.schedule_activity("sunrise-hike", Day::Saturday, time);
//!
//! assert_eq!(store.scheduled().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::models::{ScheduledActivity, WeekendPlan};
use crate::persist::{PersistedState, Storage};

// Module declarations
pub mod builder;
mod activity_ops;
mod plan_ops;


// Re-export the main types
pub use builder::StoreBuilder;

/// The mutable state container for the weekend plan.
pub struct WeekendStore {
    pub(crate) scheduled: Vec<ScheduledActivity>,
    pub(crate) current_plan: Option<WeekendPlan>,
    pub(crate) selected_theme: Option<String>,
    pub(crate) storage: Option<Storage>,
}

impl WeekendStore {
    /// Creates an empty, in-memory store with no persistence.
    pub fn new() -> Self {
        Self {
            scheduled: Vec::new(),
            current_plan: None,
            selected_theme: None,
            storage: None,
        }
    }

    /// Creates a store from previously persisted state, writing through to
    /// the given storage adapter on every mutation.
    pub(crate) fn with_storage(state: PersistedState, storage: Storage) -> Self {
        Self {
            scheduled: state.scheduled,
            current_plan: state.current_plan,
            selected_theme: state.selected_theme,
            storage: Some(storage),
        }
    }

    /// The live scheduled-activity list, in insertion/reorder order.
    pub fn scheduled(&self) -> &[ScheduledActivity] {
        &self.scheduled
    }

    /// The most recently saved plan snapshot, if any.
    pub fn current_plan(&self) -> Option<&WeekendPlan> {
        self.current_plan.as_ref()
    }

    /// The selected theme id, if any.
    pub fn selected_theme(&self) -> Option<&str> {
        self.selected_theme.as_deref()
    }

    /// Write-through hook called at the end of every mutation. Best effort:
    /// failures are diagnosed and swallowed.
    pub(crate) fn persist(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        let state = PersistedState {
            scheduled: self.scheduled.clone(),
            current_plan: self.current_plan.clone(),
            selected_theme: self.selected_theme.clone(),
        };
        if let Err(err) = storage.save(&state) {
            log::warn!("failed to persist weekend state: {err}");
        }
    }
}

impl Default for WeekendStore {
    fn default() -> Self {
        Self::new()
    }
}
