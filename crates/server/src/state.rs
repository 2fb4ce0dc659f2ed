// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use timetrail_core::{Clock, LocalClock};
use timetrail_db::Database;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Session log store.
    pub db: Database,
    /// Source of "today" for streaks and week boundaries.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new application state on the local calendar, wrapped in an Arc for sharing.
    pub fn new(db: Database) -> Arc<Self> {
        Self::with_clock(db, Arc::new(LocalClock))
    }

    /// Create with an explicit clock (tests pin the calendar this way).
    pub fn with_clock(db: Database, clock: Arc<dyn Clock>) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            db,
            clock,
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
