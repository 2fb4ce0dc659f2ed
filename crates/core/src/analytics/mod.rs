//! Activity analytics engine.
//!
//! Turns one user's session log into dashboard aggregates. Every function in
//! here is pure: the log is borrowed immutably and results are built fresh
//! per call.

pub mod chart;
pub mod daily;
pub mod project;
pub mod streak;
pub mod weekly;

use crate::error::AnalyticsError;

pub use chart::build_chart_data;
pub use daily::{aggregate_daily, week_start, weeks_between, DailySummary};
pub use project::aggregate_projects;
pub use streak::{current_streak, detect_streaks, longest_streak, CONSECUTIVE_DAY_GAP_HOURS};
pub use weekly::{aggregate_weekly, aggregate_weeks, average_week, iso_week_key, weekday_table};

/// Add `secs` to a running total, failing instead of wrapping.
pub(crate) fn accumulate(total: &mut u64, secs: u64) -> Result<(), AnalyticsError> {
    *total = total
        .checked_add(secs)
        .ok_or(AnalyticsError::DurationOverflow)?;
    Ok(())
}
