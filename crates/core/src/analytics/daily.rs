//! Day bucketing: heatmap cells, sorted day buckets and the week offset.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use super::accumulate;
use crate::error::AnalyticsError;
use crate::types::{DayBucket, HeatmapPoint, SessionRecord};

/// Output of [`aggregate_daily`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailySummary {
    /// One cell per logged day, newest first.
    pub heatmap: Vec<HeatmapPoint>,
    /// One bucket per logged day, unique by date, newest first.
    pub days: Vec<DayBucket>,
    /// Whole ISO weeks between the current week and the week of the newest
    /// bucket. `None` when the log is empty.
    pub week_offset: Option<u32>,
}

/// Group sessions by calendar day and sum their durations.
pub fn aggregate_daily(
    records: &[SessionRecord],
    today: NaiveDate,
) -> Result<DailySummary, AnalyticsError> {
    let mut totals: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        accumulate(totals.entry(record.date).or_default(), record.duration_secs)?;
    }

    let days: Vec<DayBucket> = totals
        .into_iter()
        .rev()
        .map(|(date, total_duration)| DayBucket {
            date,
            total_duration,
        })
        .collect();

    let heatmap = days.iter().map(HeatmapPoint::from).collect();
    let week_offset = days.first().map(|newest| weeks_between(newest.date, today));

    Ok(DailySummary {
        heatmap,
        days,
        week_offset,
    })
}

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Whole weeks from the week containing `earlier` to the week containing
/// `later`. Saturates at 0 when `earlier` falls in the same or a later week.
pub fn weeks_between(earlier: NaiveDate, later: NaiveDate) -> u32 {
    let days = (week_start(later) - week_start(earlier)).num_days();
    if days <= 0 {
        0
    } else {
        u32::try_from(days / 7).unwrap_or(u32::MAX)
    }
}
