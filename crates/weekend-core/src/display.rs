//! Display implementations for the overview projection.
//!
//! These render the plan as readable markdown, which is the textual
//! "overview" surface the export and share collaborators consume. Display
//! is strictly one-way: nothing here touches store state.

use std::fmt;

use jiff::tz::TimeZone;
use jiff::Timestamp;

use crate::models::{ScheduledActivity, WeekendPlan, WeekendSummary};

/// A wrapper around `Timestamp` that formats as a local wall-clock time
/// (`HH:MM`) in the system timezone.
pub struct LocalTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_zoned(TimeZone::system()).strftime("%H:%M"))
    }
}

/// A wrapper around `Timestamp` that formats as a full local date and time
/// (`YYYY-MM-DD HH:MM:SS TZ`).
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

impl fmt::Display for ScheduledActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.placement.time() {
            Some(time) => write!(f, "- {} ", LocalTime(&time))?,
            None => write!(f, "- [unscheduled] ")?,
        }
        write!(
            f,
            "{} ({}h, {})",
            self.activity.name,
            self.activity.duration,
            self.activity.category.as_str()
        )?;
        if let Some(location) = &self.activity.location {
            write!(f, " @ {}", location.name)?;
        }
        Ok(())
    }
}

impl fmt::Display for WeekendSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} activities, {} hours, ~${} estimated",
            self.activities, self.total_hours, self.estimated_cost
        )
    }
}

impl fmt::Display for WeekendPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.name, self.theme.as_str())?;
        writeln!(f)?;

        for (day, entries) in [("Saturday", &self.saturday), ("Sunday", &self.sunday)] {
            writeln!(f, "## {} ({} activities)", day, entries.len())?;
            if entries.is_empty() {
                writeln!(f, "No activities scheduled for {day}")?;
            } else {
                for entry in entries {
                    writeln!(f, "{entry}")?;
                }
            }
            writeln!(f)?;
        }

        write!(f, "*Saved {}*", LocalDateTime(&self.created_at))
    }
}
