// crates/core/src/types.rs
use chrono::{NaiveDate, Weekday};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::RecordError;

/// Date format used for session days on the wire and in the store.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Longest single session accepted at ingestion: one full day.
pub const MAX_SESSION_SECS: u64 = 86_400;

/// Header row of the per-project share chart.
pub const PIE_CHART_HEADER: [&str; 2] = ["Project", "Hours"];

/// Header row of the weekday comparison chart.
pub const BAR_CHART_HEADER: [&str; 3] = ["Day", "This Week", "Last Week"];

/// One logged unit of work: a project, a calendar day and a duration in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub project_name: String,
    pub date: NaiveDate,
    pub duration_secs: u64,
}

impl SessionRecord {
    pub fn new(project_name: impl Into<String>, date: NaiveDate, duration_secs: u64) -> Self {
        Self {
            project_name: project_name.into(),
            date,
            duration_secs,
        }
    }

    /// Validate raw, loosely typed input into a record.
    ///
    /// The project name is trimmed. An empty name, a date that is not
    /// `YYYY-MM-DD` or a duration outside `0..=MAX_SESSION_SECS` is rejected.
    pub fn from_raw(project_name: &str, date: &str, duration_secs: i64) -> Result<Self, RecordError> {
        let project_name = project_name.trim();
        if project_name.is_empty() {
            return Err(RecordError::EmptyProjectName);
        }
        let duration_secs =
            u64::try_from(duration_secs).map_err(|_| RecordError::NegativeDuration(duration_secs))?;
        if duration_secs > MAX_SESSION_SECS {
            return Err(RecordError::DurationTooLarge(duration_secs));
        }
        let date = NaiveDate::parse_from_str(date.trim(), DAY_FORMAT).map_err(|_| {
            RecordError::InvalidDate {
                value: date.to_string(),
            }
        })?;
        Ok(Self::new(project_name, date, duration_secs))
    }
}

/// Total logged duration for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub total_duration: u64,
}

/// Total logged duration for one ISO-8601 (year, week) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekBucket {
    pub iso_year: i32,
    pub iso_week: u32,
    pub total_duration: u64,
}

impl WeekBucket {
    pub fn key(&self) -> (i32, u32) {
        (self.iso_year, self.iso_week)
    }
}

/// Total logged duration for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBucket {
    pub project_name: String,
    pub total_duration: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakResult {
    pub longest: u32,
    pub current: u32,
}

/// A single heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatmapPoint {
    pub date: NaiveDate,
    pub count: u64,
}

impl From<&DayBucket> for HeatmapPoint {
    fn from(bucket: &DayBucket) -> Self {
        Self {
            date: bucket.date,
            count: bucket.total_duration,
        }
    }
}

/// One weekday of the this-week / last-week comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayRow {
    pub day: Weekday,
    pub this_week: u64,
    pub last_week: u64,
}

impl WeekdayRow {
    pub fn label(&self) -> &'static str {
        weekday_label(self.day)
    }
}

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

/// Weekly totals plus the weekday comparison table.
///
/// `weekday_table` always holds seven rows ordered Sunday through Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyComparison {
    #[serde(rename = "thisWeekHrs")]
    pub this_week: u64,
    #[serde(rename = "lastWeekHrs")]
    pub last_week: u64,
    #[serde(rename = "avgWeekHrs")]
    pub average_week: u64,
    #[serde(rename = "barChartData", serialize_with = "serialize_bar_chart")]
    pub weekday_table: [WeekdayRow; 7],
}

/// Heatmap plus streak counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyData {
    pub heatmap: Vec<HeatmapPoint>,
    pub longest_streak: u32,
    pub current_streak: u32,
}

/// Everything the dashboard renders for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub daily_data: DailyData,
    #[serde(serialize_with = "serialize_pie_chart")]
    pub pie_data: Vec<ProjectBucket>,
    pub weekly_data: WeeklyComparison,
}

/// `[["Project","Hours"], [name, total], ...]`
fn serialize_pie_chart<S: Serializer>(rows: &[ProjectBucket], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(rows.len() + 1))?;
    seq.serialize_element(&PIE_CHART_HEADER)?;
    for row in rows {
        seq.serialize_element(&(&row.project_name, row.total_duration))?;
    }
    seq.end()
}

/// `[["Day","This Week","Last Week"], ["Sun", n, n], ..., ["Sat", n, n]]`
fn serialize_bar_chart<S: Serializer>(rows: &[WeekdayRow; 7], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(rows.len() + 1))?;
    seq.serialize_element(&BAR_CHART_HEADER)?;
    for row in rows {
        seq.serialize_element(&(row.label(), row.this_week, row.last_week))?;
    }
    seq.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DAY_FORMAT).unwrap()
    }

    #[test]
    fn test_from_raw_accepts_valid_record() {
        let record = SessionRecord::from_raw("  galaxy  ", "2024-03-05", 3600).unwrap();
        assert_eq!(record, SessionRecord::new("galaxy", day("2024-03-05"), 3600));
    }

    #[test]
    fn test_from_raw_rejects_empty_project() {
        let err = SessionRecord::from_raw("   ", "2024-03-05", 10).unwrap_err();
        assert_eq!(err, RecordError::EmptyProjectName);
    }

    #[test]
    fn test_from_raw_rejects_negative_duration() {
        let err = SessionRecord::from_raw("a", "2024-03-05", -1).unwrap_err();
        assert_eq!(err, RecordError::NegativeDuration(-1));
    }

    #[test]
    fn test_from_raw_bounds_duration_to_one_day() {
        let record = SessionRecord::from_raw("a", "2024-03-05", 86_400).unwrap();
        assert_eq!(record.duration_secs, MAX_SESSION_SECS);

        let err = SessionRecord::from_raw("a", "2024-03-05", 86_401).unwrap_err();
        assert_eq!(err, RecordError::DurationTooLarge(86_401));

        let err = SessionRecord::from_raw("a", "2024-03-05", i64::MAX).unwrap_err();
        assert_eq!(err, RecordError::DurationTooLarge(i64::MAX as u64));
    }

    #[test]
    fn test_from_raw_rejects_bad_date() {
        let err = SessionRecord::from_raw("a", "05/03/2024", 1).unwrap_err();
        assert!(matches!(err, RecordError::InvalidDate { .. }));
    }

    #[test]
    fn test_session_record_serialization() {
        let record = SessionRecord::new("galaxy", day("2024-03-05"), 42);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"projectName":"galaxy","date":"2024-03-05","durationSecs":42}"#);
    }

    #[test]
    fn test_heatmap_point_serializes_date_as_day_string() {
        let point = HeatmapPoint::from(&DayBucket {
            date: day("2024-01-31"),
            total_duration: 7,
        });
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json, serde_json::json!({"date": "2024-01-31", "count": 7}));
    }

    #[test]
    fn test_weekday_labels() {
        let labels: Vec<_> = [Weekday::Sun, Weekday::Wed, Weekday::Sat]
            .into_iter()
            .map(weekday_label)
            .collect();
        assert_eq!(labels, vec!["Sun", "Wed", "Sat"]);
    }
}
