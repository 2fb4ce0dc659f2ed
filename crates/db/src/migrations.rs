//! Inline SQL migrations for the timetrail database schema.
//!
//! One statement per entry; entries are applied in order and tracked by
//! 1-based version in `_migrations`. Append only.

pub const MIGRATIONS: &[&str] = &[
    // Migration 1: session log
    r#"
CREATE TABLE IF NOT EXISTS sessions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    project_name TEXT NOT NULL,
    day TEXT NOT NULL,
    duration_secs INTEGER NOT NULL CHECK (duration_secs >= 0),
    created_at INTEGER NOT NULL
);
"#,
    // Migration 2: per-user lookups, newest day first
    r#"
CREATE INDEX IF NOT EXISTS idx_sessions_user_day ON sessions(user_id, day DESC);
"#,
    // Migration 3: per-user project totals
    r#"
CREATE INDEX IF NOT EXISTS idx_sessions_user_project ON sessions(user_id, project_name);
"#,
];
