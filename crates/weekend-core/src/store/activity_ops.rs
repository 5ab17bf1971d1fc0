//! Activity operations for the scheduling store.

use jiff::Timestamp;

use super::WeekendStore;
use crate::models::{Activity, Day, Placement, ScheduledActivity};

impl WeekendStore {
    /// Adds a catalog activity to the plan as an unplaced entry.
    ///
    /// Idempotent: if an entry with the same id is already present this is
    /// a no-op, so there is never more than one entry per activity id.
    pub fn add_activity(&mut self, activity: &Activity) {
        if self.scheduled.iter().any(|entry| entry.id() == activity.id) {
            return;
        }
        self.scheduled.push(ScheduledActivity::new(activity.clone()));
        self.persist();
    }

    /// Removes the entry with the given id; no-op when absent.
    pub fn remove_activity(&mut self, activity_id: &str) {
        let before = self.scheduled.len();
        self.scheduled.retain(|entry| entry.id() != activity_id);
        if self.scheduled.len() != before {
            self.persist();
        }
    }

    /// Assigns a day and start time to the entry with the given id.
    ///
    /// Exactly one entry is mutated; every other entry is untouched in both
    /// value and position. Unknown ids are silent no-ops. Overlapping times
    /// on the same day are permitted.
    pub fn schedule_activity(&mut self, activity_id: &str, day: Day, time: Timestamp) {
        let Some(entry) = self
            .scheduled
            .iter_mut()
            .find(|entry| entry.id() == activity_id)
        else {
            return;
        };
        entry.placement = Placement::Placed { day, time };
        self.persist();
    }

    /// Adjusts the start time of a placed entry, preserving its day.
    ///
    /// Unplaced entries are left alone: without a day there is nothing to
    /// preserve, and placement always goes through [`Self::schedule_activity`].
    pub fn update_activity_time(&mut self, activity_id: &str, new_time: Timestamp) {
        let Some(entry) = self
            .scheduled
            .iter_mut()
            .find(|entry| entry.id() == activity_id)
        else {
            return;
        };
        let Placement::Placed { time, .. } = &mut entry.placement else {
            return;
        };
        *time = new_time;
        self.persist();
    }

    /// Resets the entry with the given id to unplaced, clearing its day and
    /// time. Used when an activity is dragged back to the unscheduled tray.
    pub fn unschedule_activity(&mut self, activity_id: &str) {
        let Some(entry) = self
            .scheduled
            .iter_mut()
            .find(|entry| entry.id() == activity_id)
        else {
            return;
        };
        if entry.placement == Placement::Unplaced {
            return;
        }
        entry.placement = Placement::Unplaced;
        self.persist();
    }

    /// Reorders the given day's entries, moving the entry at `drag_index`
    /// to `hover_index`. Indices address the day's entries in their current
    /// array order, not their chronological order.
    ///
    /// The day's existing start times are then re-assigned in ascending
    /// order to the new sequence, so the day's visual order and its
    /// chronological order always agree. The set of times on the day is
    /// unchanged; only which entry holds which time moves.
    ///
    /// Equal or out-of-range indices are silent no-ops (the index type
    /// rules out negatives). Entries on other days and unplaced entries
    /// keep their relative order.
    pub fn move_activity_in_day(&mut self, day: Day, drag_index: usize, hover_index: usize) {
        let day_count = self
            .scheduled
            .iter()
            .filter(|entry| entry.placement.day() == Some(day))
            .count();
        if drag_index == hover_index || drag_index >= day_count || hover_index >= day_count {
            return;
        }

        let (mut day_entries, others): (Vec<ScheduledActivity>, Vec<ScheduledActivity>) = self
            .scheduled
            .drain(..)
            .partition(|entry| entry.placement.day() == Some(day));

        let moved = day_entries.remove(drag_index);
        day_entries.insert(hover_index, moved);

        // Re-number: the day's times, ascending, assigned to the new order.
        let mut times: Vec<Timestamp> = day_entries
            .iter()
            .filter_map(|entry| entry.placement.time())
            .collect();
        times.sort_unstable();
        for (entry, new_time) in day_entries.iter_mut().zip(times) {
            if let Placement::Placed { time, .. } = &mut entry.placement {
                *time = new_time;
            }
        }

        self.scheduled = others.into_iter().chain(day_entries).collect();
        self.persist();
    }
}
