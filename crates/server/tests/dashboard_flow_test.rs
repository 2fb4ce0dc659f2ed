//! End-to-end: post sessions over HTTP against a file-backed store, then read the chart.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use timetrail_core::FixedClock;
use timetrail_db::Database;
use timetrail_server::{create_app_with_state, AppState};
use tower::ServiceExt;

async fn call(app: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn app_at(db: Database, today: &str) -> Router {
    let today = NaiveDate::parse_from_str(today, "%Y-%m-%d").unwrap();
    create_app_with_state(AppState::with_clock(db, Arc::new(FixedClock(today))))
}

#[tokio::test]
async fn test_posted_sessions_drive_the_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("timetrail.db");
    let app = app_at(Database::new(&db_path).await.unwrap(), "2024-05-16").await;

    let sessions = [
        ("alpha", "2024-05-06", 1200), // Monday, last week
        ("alpha", "2024-05-13", 3600), // Monday, this week
        ("beta", "2024-05-14", 1800),
        ("alpha", "2024-05-15", 600),
    ];
    for (project, timestamp, secs) in sessions {
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/users/ada/sessions",
            Some(serde_json::json!({
                "projectName": project,
                "timestamp": timestamp,
                "sessionLength": secs,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, chart) = call(&app, Method::GET, "/api/users/ada/chart-data", None).await;
    assert_eq!(status, StatusCode::OK);

    // 13 -> 14 -> 15 are two consecutive gaps; the 6th is a week back.
    assert_eq!(chart["dailyData"]["longestStreak"], 2);
    assert_eq!(chart["dailyData"]["currentStreak"], 2);
    assert_eq!(chart["dailyData"]["heatmap"].as_array().unwrap().len(), 4);

    assert_eq!(
        chart["pieData"],
        serde_json::json!([["Project", "Hours"], ["alpha", 5400], ["beta", 1800]])
    );

    let weekly = &chart["weeklyData"];
    assert_eq!(weekly["thisWeekHrs"], 6000);
    assert_eq!(weekly["lastWeekHrs"], 1200);
    assert_eq!(weekly["avgWeekHrs"], 3600);
    assert_eq!(weekly["barChartData"][2], serde_json::json!(["Mon", 3600, 1200]));
    assert_eq!(weekly["barChartData"][3], serde_json::json!(["Tue", 1800, 0]));

    // Reopening the file sees the same log.
    drop(app);
    let reopened = app_at(Database::new(&db_path).await.unwrap(), "2024-05-16").await;
    let (_, again) = call(&reopened, Method::GET, "/api/users/ada/chart-data", None).await;
    assert_eq!(again, chart);
}

#[tokio::test]
async fn test_cleared_log_returns_empty_chart() {
    let db = Database::new_in_memory().await.unwrap();
    let app = app_at(db, "2024-05-16").await;

    call(
        &app,
        Method::POST,
        "/api/users/ada/sessions",
        Some(serde_json::json!({"projectName": "alpha", "timestamp": "2024-05-16", "sessionLength": 60})),
    )
    .await;

    let (status, deleted) = call(&app, Method::DELETE, "/api/users/ada/sessions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["deleted"], 1);

    let (_, chart) = call(&app, Method::GET, "/api/users/ada/chart-data", None).await;
    assert_eq!(chart["dailyData"]["heatmap"], serde_json::json!([]));
    assert_eq!(chart["weeklyData"]["thisWeekHrs"], 0);
}
