//! Per-project time distribution.

use std::collections::HashMap;

use super::accumulate;
use crate::error::AnalyticsError;
use crate::types::{ProjectBucket, SessionRecord};

/// Sum session durations per project.
///
/// Ordered by total descending, ties broken by project name, so repeated
/// calls over the same log produce the same table.
pub fn aggregate_projects(records: &[SessionRecord]) -> Result<Vec<ProjectBucket>, AnalyticsError> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for record in records {
        accumulate(
            totals.entry(record.project_name.as_str()).or_default(),
            record.duration_secs,
        )?;
    }

    let mut buckets: Vec<ProjectBucket> = totals
        .into_iter()
        .map(|(name, total_duration)| ProjectBucket {
            project_name: name.to_string(),
            total_duration,
        })
        .collect();
    buckets.sort_by(|a, b| {
        b.total_duration
            .cmp(&a.total_duration)
            .then_with(|| a.project_name.cmp(&b.project_name))
    });
    Ok(buckets)
}
