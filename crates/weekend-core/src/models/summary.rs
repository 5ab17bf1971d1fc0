//! Weekend summary aggregates.

use serde::{Deserialize, Serialize};

use super::ScheduledActivity;

/// Aggregate statistics over the scheduled-activity list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekendSummary {
    /// Total number of activities in the plan
    pub activities: usize,

    /// Sum of durations over all activities, in hours
    pub total_hours: f64,

    /// Sum of per-tier dollar estimates over all activities
    pub estimated_cost: u32,
}

impl From<&[ScheduledActivity]> for WeekendSummary {
    fn from(scheduled: &[ScheduledActivity]) -> Self {
        Self {
            activities: scheduled.len(),
            total_hours: scheduled.iter().map(|entry| entry.activity.duration).sum(),
            estimated_cost: scheduled
                .iter()
                .map(|entry| entry.activity.cost.estimate())
                .sum(),
        }
    }
}
