// crates/server/src/routes/sessions.rs
//! Session log endpoints.
//!
//! - GET    /api/users/{user_id}/sessions - list the log, newest first
//! - POST   /api/users/{user_id}/sessions - append one session
//! - DELETE /api/users/{user_id}/sessions - clear the log

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use timetrail_core::{ProjectBucket, SessionRecord, DAY_FORMAT};
use timetrail_db::StoredSession;

use crate::error::{ApiError, ApiResult};
use crate::metrics::RequestTimer;
use crate::routes::validate_user_id;
use crate::state::AppState;

/// Body of a new session. `timestamp` is a `YYYY-MM-DD` day, `sessionLength` is seconds.
#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(Serialize))]
#[serde(rename_all = "camelCase")]
pub struct NewSessionRequest {
    pub project_name: String,
    pub timestamp: String,
    pub session_length: i64,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    pub id: i64,
    pub project_name: String,
    pub timestamp: String,
    pub session_length: u64,
}

impl From<StoredSession> for SessionEntry {
    fn from(stored: StoredSession) -> Self {
        Self {
            id: stored.id,
            timestamp: stored.record.date.format(DAY_FORMAT).to_string(),
            session_length: stored.record.duration_secs,
            project_name: stored.record.project_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(rename_all = "camelCase")]
pub struct ProjectTotal {
    pub project_name: String,
    pub total_duration: u64,
}

impl From<ProjectBucket> for ProjectTotal {
    fn from(bucket: ProjectBucket) -> Self {
        Self {
            project_name: bucket.project_name,
            total_duration: bucket.total_duration,
        }
    }
}

/// Returned after a session is stored, with the user's running totals.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(rename_all = "camelCase")]
pub struct CreatedSession {
    pub id: i64,
    pub project_totals: Vec<ProjectTotal>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct DeletedSessions {
    pub deleted: u64,
}

/// GET /api/users/{user_id}/sessions
pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<SessionEntry>>> {
    validate_user_id(&user_id)?;
    let sessions = state.db.list_sessions(&user_id).await?;
    Ok(Json(sessions.into_iter().map(SessionEntry::from).collect()))
}

/// POST /api/users/{user_id}/sessions
///
/// Malformed bodies and invalid records are rejected with 400 before anything
/// is written.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    body: Result<Json<NewSessionRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedSession>)> {
    let timer = RequestTimer::new("create_session");
    match insert_for_user(&state, &user_id, body).await {
        Ok(created) => {
            timer.finish(StatusCode::CREATED.as_u16());
            Ok((StatusCode::CREATED, Json(created)))
        }
        Err(e) => {
            timer.finish(e.status_code().as_u16());
            Err(e)
        }
    }
}

async fn insert_for_user(
    state: &AppState,
    user_id: &str,
    body: Result<Json<NewSessionRequest>, JsonRejection>,
) -> Result<CreatedSession, ApiError> {
    validate_user_id(user_id)?;
    let Json(req) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let record = SessionRecord::from_raw(&req.project_name, &req.timestamp, req.session_length)?;
    let (id, totals) = state.db.insert_session_with_totals(user_id, &record).await?;

    tracing::info!(
        user_id,
        session_id = id,
        project = %record.project_name,
        duration_secs = record.duration_secs,
        projects = totals.len(),
        "Stored session"
    );

    Ok(CreatedSession {
        id,
        project_totals: totals.into_iter().map(ProjectTotal::from).collect(),
    })
}

/// DELETE /api/users/{user_id}/sessions
pub async fn delete_sessions(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<DeletedSessions>> {
    validate_user_id(&user_id)?;
    let deleted = state.db.delete_sessions_for_user(&user_id).await?;
    tracing::info!(user_id = %user_id, deleted, "Cleared session log");
    Ok(Json(DeletedSessions { deleted }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/users/{user_id}/sessions",
        get(list_sessions).post(create_session).delete(delete_sessions),
    )
}
