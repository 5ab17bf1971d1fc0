//! Derived view projections over the scheduled-activity list.
//!
//! Pure, referentially transparent functions: same input list, same output,
//! no mutation of the input. View components call these on every render;
//! the store never caches their results.

use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::models::{Day, ScheduledActivity, WeekendSummary};

/// Placed entries for the given day, stable-sorted by start time ascending.
///
/// The sort is stable, so entries with equal timestamps keep their prior
/// relative order.
pub fn day_activities(scheduled: &[ScheduledActivity], day: Day) -> Vec<&ScheduledActivity> {
    let mut entries: Vec<&ScheduledActivity> = scheduled
        .iter()
        .filter(|entry| entry.placement.day() == Some(day))
        .collect();
    entries.sort_by_key(|entry| entry.placement.time());
    entries
}

/// Entries that have not been given a day and time yet, in array order.
pub fn unscheduled(scheduled: &[ScheduledActivity]) -> Vec<&ScheduledActivity> {
    scheduled
        .iter()
        .filter(|entry| !entry.placement.is_placed())
        .collect()
}

/// Sum of durations over the whole list, in hours. Empty list sums to zero.
pub fn total_duration(scheduled: &[ScheduledActivity]) -> f64 {
    scheduled.iter().map(|entry| entry.activity.duration).sum()
}

/// Sum of the fixed per-tier dollar estimates over the whole list.
pub fn estimated_cost(scheduled: &[ScheduledActivity]) -> u32 {
    scheduled
        .iter()
        .map(|entry| entry.activity.cost.estimate())
        .sum()
}

/// Entries whose activity has a location, i.e. the map-eligible subset.
pub fn with_location(scheduled: &[ScheduledActivity]) -> Vec<&ScheduledActivity> {
    scheduled
        .iter()
        .filter(|entry| entry.activity.location.is_some())
        .collect()
}

/// Aggregate statistics over the whole list.
pub fn summary(scheduled: &[ScheduledActivity]) -> WeekendSummary {
    WeekendSummary::from(scheduled)
}

/// Placed entries falling on the given civil date in the system timezone,
/// time-sorted. Used by the calendar view.
pub fn activities_on(scheduled: &[ScheduledActivity], date: Date) -> Vec<&ScheduledActivity> {
    let tz = TimeZone::system();
    let mut entries: Vec<&ScheduledActivity> = scheduled
        .iter()
        .filter(|entry| {
            entry
                .placement
                .time()
                .map_or(false, |time| time.to_zoned(tz.clone()).date() == date)
        })
        .collect();
    entries.sort_by_key(|entry| entry.placement.time());
    entries
}
