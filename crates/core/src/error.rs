// crates/core/src/error.rs
use thiserror::Error;

/// Errors raised while computing dashboard aggregates.
///
/// An empty session log is not an error: the engine short-circuits to a
/// zeroed chart. A missing week bucket is not an error either, it reads as 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("Cannot average weekly totals over a span of zero weeks")]
    EmptyWeekSpan,

    #[error("Summed session durations overflow a 64-bit counter")]
    DurationOverflow,
}

/// Errors raised when a raw session record fails validation at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Project name must not be empty")]
    EmptyProjectName,

    #[error("Session duration must be non-negative, got {0}")]
    NegativeDuration(i64),

    #[error("Session duration {0}s exceeds the one-day limit")]
    DurationTooLarge(u64),

    #[error("Invalid session date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_error_display() {
        let err = AnalyticsError::EmptyWeekSpan;
        assert!(err.to_string().contains("zero weeks"));
    }

    #[test]
    fn test_record_error_display() {
        let err = RecordError::NegativeDuration(-30);
        assert_eq!(err.to_string(), "Session duration must be non-negative, got -30");

        let err = RecordError::InvalidDate {
            value: "yesterday".to_string(),
        };
        assert!(err.to_string().contains("'yesterday'"));
    }
}
