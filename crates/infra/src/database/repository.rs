//! Helpers shared by the SQLite repositories.
//!
//! rusqlite is synchronous, so every repository call runs its statements on
//! the blocking thread pool with a pooled connection.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use pitchsync_domain::constants::SEASON_DATE_FORMAT;
use pitchsync_domain::{LocalId, PitchSyncError, Result as DomainResult};
use rusqlite::{params, Connection};
use tokio::task;

use super::manager::DbManager;
use crate::errors::InfraError;

/// Run `op` against a pooled connection on the blocking thread pool.
pub(crate) async fn run_blocking<T, F>(db: &Arc<DbManager>, op: F) -> DomainResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut Connection) -> DomainResult<T> + Send + 'static,
{
    let db = Arc::clone(db);
    task::spawn_blocking(move || -> DomainResult<T> {
        let mut conn = db.get_connection()?;
        op(&mut conn)
    })
    .await
    .map_err(map_join_error)?
}

/// Append `(owner, member)` pairs to an association table. Existing pairs are
/// left alone.
pub(crate) fn insert_links(
    conn: &mut Connection,
    sql: &str,
    owner_id: LocalId,
    member_ids: &[LocalId],
) -> DomainResult<()> {
    if member_ids.is_empty() {
        return Ok(());
    }
    let tx = conn.transaction().map_err(map_sql_error)?;
    {
        let mut stmt = tx.prepare_cached(sql).map_err(map_sql_error)?;
        for member_id in member_ids {
            stmt.execute(params![owner_id, member_id]).map_err(map_sql_error)?;
        }
    }
    tx.commit().map_err(map_sql_error)
}

/// Read the member ids linked to `owner_id`.
pub(crate) fn select_links(
    conn: &Connection,
    sql: &str,
    owner_id: LocalId,
) -> DomainResult<Vec<LocalId>> {
    let mut stmt = conn.prepare_cached(sql).map_err(map_sql_error)?;
    let rows = stmt
        .query_map(params![owner_id], |row| row.get::<_, LocalId>(0))
        .map_err(map_sql_error)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
}

pub(crate) fn now_ts() -> i64 {
    Utc::now().timestamp()
}

pub(crate) fn date_to_sql(date: Option<NaiveDate>) -> Option<String> {
    date.map(|value| value.format(SEASON_DATE_FORMAT).to_string())
}

/// Stored dates are always written by [`date_to_sql`]; anything else reads
/// back as unset.
pub(crate) fn date_from_sql(raw: Option<String>) -> Option<NaiveDate> {
    raw.and_then(|value| NaiveDate::parse_from_str(&value, SEASON_DATE_FORMAT).ok())
}

pub(crate) fn map_sql_error(err: rusqlite::Error) -> PitchSyncError {
    PitchSyncError::from(InfraError::from(err))
}

fn map_join_error(err: task::JoinError) -> PitchSyncError {
    if err.is_cancelled() {
        PitchSyncError::Internal("blocking repository task cancelled".into())
    } else {
        PitchSyncError::Internal(format!("blocking repository task failed: {err}"))
    }
}
