//! API route handlers for the timetrail server.

pub mod charts;
pub mod health;
pub mod metrics;
pub mod sessions;

use std::sync::Arc;

use axum::Router;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Longest accepted `{user_id}` path segment.
pub const MAX_USER_ID_LEN: usize = 128;

/// Create the combined router.
///
/// Routes:
/// - GET    /api/health - Health check
/// - GET    /api/users/{user_id}/chart-data - Dashboard aggregates
/// - GET    /api/users/{user_id}/sessions - Session log, newest first
/// - POST   /api/users/{user_id}/sessions - Append a session
/// - DELETE /api/users/{user_id}/sessions - Clear a user's log
/// - GET    /metrics - Prometheus scrape endpoint
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", charts::router())
        .nest("/api", sessions::router())
        .merge(metrics::router())
        .with_state(state)
}

/// User ids are opaque, but must be non-blank and bounded.
pub(crate) fn validate_user_id(user_id: &str) -> ApiResult<()> {
    if user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("user id must not be blank".to_string()));
    }
    if user_id.len() > MAX_USER_ID_LEN {
        return Err(ApiError::BadRequest(format!(
            "user id exceeds {MAX_USER_ID_LEN} bytes"
        )));
    }
    Ok(())
}
