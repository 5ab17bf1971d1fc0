//! Core library for the weekend activity planning application.
//!
//! This crate provides the scheduling and ordering state core: the store
//! that owns the list of scheduled activities, the pure projections that
//! derive day timelines and aggregate stats from it, and the coordinator
//! that turns drag-and-drop gestures into store operations. UI rendering,
//! image export, and map tiles live outside this crate and consume its
//! read surface.
//!
//! # Architecture
//!
//! - **Catalog** ([`catalog`]): immutable activity and theme reference data
//! - **Store** ([`store`]): the single mutable owner of weekend state,
//!   with a fixed set of total, never-failing operations
//! - **Projections** ([`projections`]): pure functions deriving views from
//!   the store's list on every render
//! - **Drag coordinator** ([`dnd`]): gesture-to-operation translation
//! - **Persistence** ([`persist`]): a thin write-through adapter around a
//!   single JSON blob; best-effort, never blocks a mutation
//!
//! # Quick Start
//!
//! ```rust
//! use weekend_core::{catalog, projections, StoreBuilder};
//!
//! # fn example() -> weekend_core::Result<()> {
//! let mut store = StoreBuilder::new().in_memory().build()?;
//!
//! for activity in catalog::activities().iter().take(2) {
//!     store.add_activity(activity);
//! }
//!
//! let summary = projections::summary(store.scheduled());
//! println!("{summary}");
//! assert_eq!(summary.activities, 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod display;
pub mod dnd;
pub mod error;
pub mod models;
pub mod persist;
pub mod projections;
pub mod store;

// Re-export commonly used types
pub use display::{LocalDateTime, LocalTime};
pub use dnd::{Container, DragItem};
pub use error::{Result, StoreError};
pub use models::{
    Activity, ActivityFilter, Category, CostTier, Day, Location, Mood, Placement,
    ScheduledActivity, ThemeKind, TimeOfDay, WeekendPlan, WeekendSummary, WeekendTheme,
};
pub use persist::{PersistedState, Storage};
pub use store::{StoreBuilder, WeekendStore};
