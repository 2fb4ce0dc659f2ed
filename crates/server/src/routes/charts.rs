// crates/server/src/routes/charts.rs
//! Dashboard chart endpoint.
//!
//! - GET /api/users/{user_id}/chart-data - heatmap, streaks, project shares and weekly comparison

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use timetrail_core::{build_chart_data, ChartData, SessionLogSource};

use crate::error::{ApiError, ApiResult};
use crate::metrics::{record_chart_build, RequestTimer};
use crate::routes::validate_user_id;
use crate::state::AppState;

/// GET /api/users/{user_id}/chart-data
///
/// An unknown user has an empty log and gets the zeroed chart, not a 404.
pub async fn get_chart_data(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ChartData>> {
    let timer = RequestTimer::new("chart_data");
    match build_for_user(&state, &user_id).await {
        Ok(chart) => {
            timer.finish(200);
            Ok(Json(chart))
        }
        Err(e) => {
            timer.finish(e.status_code().as_u16());
            Err(e)
        }
    }
}

async fn build_for_user(state: &AppState, user_id: &str) -> Result<ChartData, ApiError> {
    validate_user_id(user_id)?;

    let log = state.db.session_log(user_id).await?;
    let today = state.today();
    let chart = build_chart_data(&log, today)?;
    record_chart_build(log.len());

    tracing::debug!(
        user_id,
        sessions = log.len(),
        projects = chart.pie_data.len(),
        %today,
        "Built chart data"
    );
    Ok(chart)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/users/{user_id}/chart-data", get(get_chart_data))
}
