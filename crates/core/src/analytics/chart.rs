//! Composes the daily, project and weekly aggregates into one response.

use chrono::NaiveDate;

use super::daily::aggregate_daily;
use super::project::aggregate_projects;
use super::streak::detect_streaks;
use super::weekly::{aggregate_weekly, empty_weekday_table};
use crate::error::AnalyticsError;
use crate::types::{ChartData, DailyData, SessionRecord, WeeklyComparison};

impl WeeklyComparison {
    pub fn empty() -> Self {
        Self {
            this_week: 0,
            last_week: 0,
            average_week: 0,
            weekday_table: empty_weekday_table(),
        }
    }
}

impl ChartData {
    /// Chart for a user with no logged sessions.
    pub fn empty() -> Self {
        Self {
            daily_data: DailyData::default(),
            pie_data: Vec::new(),
            weekly_data: WeeklyComparison::empty(),
        }
    }
}

/// Build every dashboard aggregate from one user's session log.
///
/// `today` is the caller's local calendar day; it anchors the current streak
/// and the this-week / last-week split.
pub fn build_chart_data(
    records: &[SessionRecord],
    today: NaiveDate,
) -> Result<ChartData, AnalyticsError> {
    let daily = aggregate_daily(records, today)?;
    let Some(week_offset) = daily.week_offset else {
        tracing::debug!("empty session log, returning zeroed chart");
        return Ok(ChartData::empty());
    };

    let streaks = detect_streaks(&daily.days, today);
    let pie_data = aggregate_projects(records)?;
    let weekly_data = aggregate_weekly(records, week_offset, today)?;

    tracing::debug!(
        sessions = records.len(),
        days = daily.days.len(),
        projects = pie_data.len(),
        week_offset,
        longest_streak = streaks.longest,
        current_streak = streaks.current,
        "built chart data"
    );

    Ok(ChartData {
        daily_data: DailyData {
            heatmap: daily.heatmap,
            longest_streak: streaks.longest,
            current_streak: streaks.current,
        },
        pie_data,
        weekly_data,
    })
}
