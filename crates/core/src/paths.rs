//! Centralized path functions for app storage locations.

use std::path::PathBuf;

/// App cache root: `~/Library/Caches/timetrail/` (macOS) or `~/.cache/timetrail/` (Linux).
pub fn app_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("timetrail"))
}

/// SQLite database file: `<app_cache_dir>/timetrail.db`.
pub fn db_path() -> Option<PathBuf> {
    app_cache_dir().map(|d| d.join("timetrail.db"))
}
