// crates/db/src/queries/sessions.rs
// Session log CRUD and per-project totals.

use crate::{Database, DbError, DbResult};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::Sqlite;
use timetrail_core::{ProjectBucket, SessionLogSource, SessionRecord, DAY_FORMAT, MAX_SESSION_SECS};

/// A session record together with its row id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub id: i64,
    pub record: SessionRecord,
}

type SessionRow = (i64, String, String, i64);

fn decode_row((id, project_name, day, duration_secs): SessionRow) -> DbResult<StoredSession> {
    let record = SessionRecord::from_raw(&project_name, &day, duration_secs)
        .map_err(|source| DbError::CorruptRow { id, source })?;
    Ok(StoredSession { id, record })
}

async fn insert_row<'e, E>(executor: E, user_id: &str, record: &SessionRecord) -> DbResult<i64>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    if record.duration_secs > MAX_SESSION_SECS {
        return Err(DbError::DurationOutOfRange(record.duration_secs));
    }
    let duration_secs = i64::try_from(record.duration_secs)
        .map_err(|_| DbError::DurationOutOfRange(record.duration_secs))?;
    let day = record.date.format(DAY_FORMAT).to_string();

    let result = sqlx::query(
        r#"
        INSERT INTO sessions (user_id, project_name, day, duration_secs, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(user_id)
    .bind(&record.project_name)
    .bind(day)
    .bind(duration_secs)
    .bind(Utc::now().timestamp())
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

async fn project_totals<'e, E>(executor: E, user_id: &str) -> DbResult<Vec<ProjectBucket>>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let rows: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT project_name, SUM(duration_secs)
        FROM sessions
        WHERE user_id = ?1
        GROUP BY project_name
        ORDER BY 2 DESC, 1 ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(project_name, total)| ProjectBucket {
            project_name,
            total_duration: total.max(0) as u64,
        })
        .collect())
}

impl Database {
    /// Append one session to a user's log. Returns the new row id.
    pub async fn insert_session(&self, user_id: &str, record: &SessionRecord) -> DbResult<i64> {
        insert_row(&self.pool, user_id, record).await
    }

    /// Append one session and read back the user's per-project totals.
    ///
    /// Both run in one transaction: if the totals cannot be computed the
    /// insert is rolled back, so a failed call never leaves a stored row.
    pub async fn insert_session_with_totals(
        &self,
        user_id: &str,
        record: &SessionRecord,
    ) -> DbResult<(i64, Vec<ProjectBucket>)> {
        let mut tx = self.pool.begin().await?;
        let id = insert_row(&mut *tx, user_id, record).await?;
        let totals = project_totals(&mut *tx, user_id).await?;
        tx.commit().await?;
        Ok((id, totals))
    }

    /// All sessions of a user, newest day first.
    pub async fn list_sessions(&self, user_id: &str) -> DbResult<Vec<StoredSession>> {
        let rows: Vec<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, project_name, day, duration_secs
            FROM sessions
            WHERE user_id = ?1
            ORDER BY day DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(decode_row).collect()
    }

    /// The session log the analytics engine consumes.
    pub async fn get_session_log(&self, user_id: &str) -> DbResult<Vec<SessionRecord>> {
        let sessions = self.list_sessions(user_id).await?;
        Ok(sessions.into_iter().map(|s| s.record).collect())
    }

    /// Total logged duration per project, largest first.
    pub async fn get_project_totals(&self, user_id: &str) -> DbResult<Vec<ProjectBucket>> {
        project_totals(&self.pool, user_id).await
    }

    /// Remove a user's whole log. Returns the number of rows deleted.
    pub async fn delete_sessions_for_user(&self, user_id: &str) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl SessionLogSource for Database {
    type Error = DbError;

    async fn session_log(&self, user_id: &str) -> Result<Vec<SessionRecord>, Self::Error> {
        self.get_session_log(user_id).await
    }
}
