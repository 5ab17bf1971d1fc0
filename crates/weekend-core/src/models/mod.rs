//! Data models for activities, placements, and weekend plans.
//!
//! This module contains the core domain models for the weekend planning
//! system. An [`Activity`] is immutable catalog data; a [`ScheduledActivity`]
//! is an activity the user has added to their plan together with its
//! [`Placement`]. Display implementations for these models live in
//! [`crate::display`] to keep data structures separate from presentation.
//!
//! Placement is an explicit tagged state rather than a sentinel timestamp:
//! an entry is either [`Placement::Unplaced`] (added but not yet assigned to
//! a day) or [`Placement::Placed`] with a definite day and start time. This
//! makes "is this activity scheduled yet?" a total, stable question.

pub mod activity;
pub mod attributes;
pub mod filters;
pub mod placement;
pub mod plan;
pub mod summary;
pub mod theme;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use activity::{Activity, Location};
pub use attributes::{Category, CostTier, Mood, TimeOfDay};
pub use filters::ActivityFilter;
pub use placement::{Day, Placement, ScheduledActivity};
pub use plan::{ThemeKind, WeekendPlan};
pub use summary::WeekendSummary;
pub use theme::WeekendTheme;
