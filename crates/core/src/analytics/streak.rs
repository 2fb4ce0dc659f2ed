//! Gap-based streak detection over day buckets.
//!
//! A streak counts the *gaps* between back-to-back logged days, not the days
//! themselves: a single logged day is a streak of 0, two adjacent days a
//! streak of 1.

use chrono::{Duration, NaiveDate};

use crate::types::{DayBucket, StreakResult};

/// Maximum distance between two day buckets for them to count as
/// back-to-back, in hours.
pub const CONSECUTIVE_DAY_GAP_HOURS: i64 = 25;

fn is_consecutive(newer: NaiveDate, older: NaiveDate) -> bool {
    newer.signed_duration_since(older) <= Duration::hours(CONSECUTIVE_DAY_GAP_HOURS)
}

/// Longest run of consecutive gaps anywhere in the log.
///
/// `days` must be sorted newest first.
pub fn longest_streak(days: &[DayBucket]) -> u32 {
    debug_assert!(days.windows(2).all(|w| w[0].date > w[1].date));

    let mut longest = 0;
    let mut run = 0;
    for pair in days.windows(2) {
        if is_consecutive(pair[0].date, pair[1].date) {
            run += 1;
        } else {
            longest = longest.max(run);
            run = 0;
        }
    }
    longest.max(run)
}

/// Run of consecutive gaps ending at the newest bucket, provided that bucket
/// is `today` or the day before. Otherwise 0.
///
/// `days` must be sorted newest first.
pub fn current_streak(days: &[DayBucket], today: NaiveDate) -> u32 {
    let Some(newest) = days.first() else {
        return 0;
    };
    if newest.date != today && Some(newest.date) != today.pred_opt() {
        return 0;
    }

    let run = days
        .windows(2)
        .take_while(|pair| is_consecutive(pair[0].date, pair[1].date))
        .count();
    u32::try_from(run).unwrap_or(u32::MAX)
}

pub fn detect_streaks(days: &[DayBucket], today: NaiveDate) -> StreakResult {
    StreakResult {
        longest: longest_streak(days),
        current: current_streak(days, today),
    }
}
