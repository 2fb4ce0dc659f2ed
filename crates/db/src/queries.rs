// crates/db/src/queries.rs
// Session log queries for the timetrail SQLite database.

mod sessions;

pub use sessions::StoredSession;
