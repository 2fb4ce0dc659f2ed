use async_trait::async_trait;

use crate::types::SessionRecord;

/// Anything that can hand over one user's complete session log.
///
/// The engine never talks to storage itself: callers fetch the log through
/// this trait and pass the materialized slice to
/// [`build_chart_data`](crate::analytics::build_chart_data). Records come back
/// in no particular order.
#[async_trait]
pub trait SessionLogSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn session_log(&self, user_id: &str) -> Result<Vec<SessionRecord>, Self::Error>;
}
