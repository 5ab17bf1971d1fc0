//! Drag-and-drop coordination.
//!
//! Translates drag gestures from the scheduler UI into store operations.
//! A gesture is either a hover (reorder within the container under the
//! pointer) or a drop (move into a target container). Cross-container
//! hovers are ignored; the move is only committed on drop, which also
//! computes a suggested start time for the target day.

use jiff::civil::{Date, Time};
use jiff::tz::TimeZone;
use jiff::{SignedDuration, ToSpan, Zoned};

use crate::models::{Day, ScheduledActivity};
use crate::projections;
use crate::store::WeekendStore;

/// Default start time for the first activity dropped into an empty day.
const DEFAULT_START: Time = jiff::civil::time(9, 0, 0, 0);

/// A drop target or drag source in the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// The tray of activities awaiting a day and time
    Unscheduled,

    /// One of the weekend day columns
    Day(Day),
}

/// The payload carried by an in-flight drag gesture.
#[derive(Debug, Clone)]
pub struct DragItem {
    /// Id of the activity being dragged
    pub id: String,

    /// Index of the entry within its source container
    pub index: usize,

    /// Container the drag started in
    pub source: Container,
}

/// Handles a hover event while dragging.
///
/// Reordering only happens within a single day column: when the hovered
/// container matches the item's source day, the store reorders by index.
/// Cross-container hovers and hovers over the unscheduled tray do nothing
/// until drop. Returns whether a reorder was issued, so the caller can
/// update the in-flight item's index.
pub fn hover(
    store: &mut WeekendStore,
    item: &DragItem,
    hover_index: usize,
    target: Container,
) -> bool {
    if item.source != target || item.index == hover_index {
        return false;
    }
    let Container::Day(day) = target else {
        return false;
    };
    store.move_activity_in_day(day, item.index, hover_index);
    true
}

/// Handles a drop event, committing the gesture.
///
/// Dropping on a day column schedules the activity at a suggested start:
/// 09:00 for an empty day, otherwise immediately after the day's last
/// activity ends. The time is anchored to that day's date in the current
/// week. Dropping on the unscheduled tray unplaces the activity.
pub fn drop_on(store: &mut WeekendStore, item: &DragItem, target: Container) {
    match target {
        Container::Unscheduled => store.unschedule_activity(&item.id),
        Container::Day(day) => {
            let start = suggested_start(&projections::day_activities(store.scheduled(), day));
            let date = weekend_date(day, Zoned::now().date());
            let Ok(zoned) = date
                .at(start.hour(), start.minute(), 0, 0)
                .to_zoned(TimeZone::system())
            else {
                return;
            };
            store.schedule_activity(&item.id, day, zoned.timestamp());
        }
    }
}

/// Suggested start time for a new activity on a day.
///
/// 09:00 when the day is empty; otherwise the end of the day's last
/// activity (`start + duration` hours), as a civil time in the system
/// timezone. Callers pass the day's entries in chronological order.
pub fn suggested_start(day_entries: &[&ScheduledActivity]) -> Time {
    let Some(last) = day_entries.last() else {
        return DEFAULT_START;
    };
    let Some(start) = last.placement.time() else {
        return DEFAULT_START;
    };
    let duration_secs = (last.activity.duration * 3600.0).round() as i64;
    let end = start
        .checked_add(SignedDuration::from_secs(duration_secs))
        .unwrap_or(start);
    end.to_zoned(TimeZone::system()).time()
}

/// The calendar date of the given weekend day in the current week.
///
/// The week starts on Sunday, so "this week's Sunday" is the Sunday at or
/// before `today` and Saturday falls six days after it.
pub fn weekend_date(day: Day, today: Date) -> Date {
    let offset = i64::from(today.weekday().to_sunday_zero_offset());
    let week_start = today.checked_sub(offset.days()).unwrap_or(today);
    let days_from_start = match day {
        Day::Saturday => 6,
        Day::Sunday => 0,
    };
    week_start
        .checked_add(days_from_start.days())
        .unwrap_or(week_start)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{Activity, Category, CostTier, Mood, Placement, TimeOfDay};

    fn activity(id: &str, duration: f64) -> Activity {
        Activity {
            id: id.to_string(),
            name: id.to_string(),
            category: Category::Outdoor,
            duration,
            description: String::new(),
            image: String::new(),
            mood: Mood::Relaxed,
            cost: CostTier::Free,
            time_of_day: TimeOfDay::Any,
            location: None,
        }
    }

    #[test]
    fn test_suggested_start_for_empty_day() {
        assert_eq!(suggested_start(&[]), jiff::civil::time(9, 0, 0, 0));
    }

    #[test]
    fn test_suggested_start_follows_last_activity() {
        let start = date(2026, 8, 29)
            .at(11, 0, 0, 0)
            .to_zoned(TimeZone::system())
            .unwrap()
            .timestamp();
        let entry = ScheduledActivity {
            activity: activity("kayak", 2.5),
            placement: Placement::Placed {
                day: Day::Saturday,
                time: start,
            },
        };

        let suggested = suggested_start(&[&entry]);
        assert_eq!(suggested, jiff::civil::time(13, 30, 0, 0));
    }

    #[test]
    fn test_weekend_date_mid_week() {
        // 2026-08-26 is a Wednesday; its week started Sunday 2026-08-23.
        let today = date(2026, 8, 26);
        assert_eq!(weekend_date(Day::Saturday, today), date(2026, 8, 29));
        assert_eq!(weekend_date(Day::Sunday, today), date(2026, 8, 23));
    }

    #[test]
    fn test_weekend_date_on_sunday() {
        // A Sunday is its own week start.
        let today = date(2026, 8, 23);
        assert_eq!(weekend_date(Day::Sunday, today), today);
        assert_eq!(weekend_date(Day::Saturday, today), date(2026, 8, 29));
    }

    #[test]
    fn test_weekend_date_on_saturday() {
        let today = date(2026, 8, 29);
        assert_eq!(weekend_date(Day::Saturday, today), today);
        assert_eq!(weekend_date(Day::Sunday, today), date(2026, 8, 23));
    }
}
