//! ISO-week bucketing and the this-week / last-week comparison.
//!
//! Every week in this module is an ISO-8601 week (Monday start, week 1 holds
//! the year's first Thursday), keyed by `(iso_year, iso_week)`. The same
//! definition backs the week offset computed in [`super::daily`].

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::accumulate;
use crate::error::AnalyticsError;
use crate::types::{SessionRecord, WeekBucket, WeekdayRow, WeeklyComparison};

/// Row order of the weekday comparison table.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub fn iso_week_key(date: NaiveDate) -> (i32, u32) {
    let week = date.iso_week();
    (week.year(), week.week())
}

fn previous_week_key(today: NaiveDate) -> (i32, u32) {
    iso_week_key(today - Duration::days(7))
}

/// Sum session durations per ISO week, newest week first.
pub fn aggregate_weeks(records: &[SessionRecord]) -> Result<Vec<WeekBucket>, AnalyticsError> {
    let mut totals: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for record in records {
        accumulate(totals.entry(iso_week_key(record.date)).or_default(), record.duration_secs)?;
    }

    Ok(totals
        .into_iter()
        .rev()
        .map(|((iso_year, iso_week), total_duration)| WeekBucket {
            iso_year,
            iso_week,
            total_duration,
        })
        .collect())
}

/// Mean weekly total, rounded to the nearest integer.
///
/// Weeks without activity between the newest bucket and the current week
/// count towards the denominator through `week_offset`.
pub fn average_week(buckets: &[WeekBucket], week_offset: u32) -> Result<u64, AnalyticsError> {
    let span = buckets.len() as u64 + u64::from(week_offset);
    if span == 0 {
        return Err(AnalyticsError::EmptyWeekSpan);
    }
    let total = buckets
        .iter()
        .try_fold(0u64, |acc, b| acc.checked_add(b.total_duration))
        .ok_or(AnalyticsError::DurationOverflow)?;
    let rounded_up = u64::from((total % span) * 2 >= span);
    Ok(total / span + rounded_up)
}

/// Totals for the current and previous ISO week.
///
/// `buckets` must be sorted newest first; only the two newest are inspected.
/// A week with no bucket reads as 0.
pub fn this_and_last_week(buckets: &[WeekBucket], today: NaiveDate) -> (u64, u64) {
    let current = iso_week_key(today);
    let previous = previous_week_key(today);
    let newest = buckets.first();
    let second = buckets.get(1);

    let this_week = newest
        .filter(|b| b.key() == current)
        .map_or(0, |b| b.total_duration);
    let last_week = [newest, second]
        .into_iter()
        .flatten()
        .find(|b| b.key() == previous)
        .map_or(0, |b| b.total_duration);

    (this_week, last_week)
}

/// Per-weekday totals of the current and previous ISO week, Sunday first.
pub fn weekday_table(
    records: &[SessionRecord],
    today: NaiveDate,
) -> Result<[WeekdayRow; 7], AnalyticsError> {
    let current = iso_week_key(today);
    let previous = previous_week_key(today);

    let mut this_week = [0u64; 7];
    let mut last_week = [0u64; 7];
    for record in records {
        let slot = record.date.weekday().num_days_from_sunday() as usize;
        let key = iso_week_key(record.date);
        if key == current {
            accumulate(&mut this_week[slot], record.duration_secs)?;
        } else if key == previous {
            accumulate(&mut last_week[slot], record.duration_secs)?;
        }
    }

    Ok(WEEKDAYS.map(|day| {
        let slot = day.num_days_from_sunday() as usize;
        WeekdayRow {
            day,
            this_week: this_week[slot],
            last_week: last_week[slot],
        }
    }))
}

pub fn empty_weekday_table() -> [WeekdayRow; 7] {
    WEEKDAYS.map(|day| WeekdayRow {
        day,
        this_week: 0,
        last_week: 0,
    })
}

pub fn aggregate_weekly(
    records: &[SessionRecord],
    week_offset: u32,
    today: NaiveDate,
) -> Result<WeeklyComparison, AnalyticsError> {
    let buckets = aggregate_weeks(records)?;
    let average_week = average_week(&buckets, week_offset)?;
    let (this_week, last_week) = this_and_last_week(&buckets, today);

    Ok(WeeklyComparison {
        this_week,
        last_week,
        average_week,
        weekday_table: weekday_table(records, today)?,
    })
}
