// crates/server/src/lib.rs
//! Timetrail server library.
//!
//! Axum HTTP surface over the session log store and the chart analytics
//! engine: a user's logged sessions go in, dashboard aggregates come out.

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod routes;
pub mod state;

pub use config::ServerArgs;
pub use error::*;
pub use logging::init_tracing;
pub use metrics::{init_metrics, render_metrics};
pub use routes::api_routes;
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use timetrail_db::Database;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application on the local calendar.
pub fn create_app(db: Database) -> Router {
    create_app_with_state(AppState::new(db))
}

/// Create the Axum application from prepared state.
///
/// Adds permissive CORS (the dashboard is served from another origin) and
/// request tracing.
pub fn create_app_with_state(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================
