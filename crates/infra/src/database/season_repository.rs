//! SQLite implementation of the `SeasonRepository` port.

use std::sync::Arc;

use async_trait::async_trait;
use pitchsync_core::SeasonRepository;
use pitchsync_domain::{Result as DomainResult, Season, SeasonFields, SrcId};
use rusqlite::{params, OptionalExtension, Row};

use super::manager::DbManager;
use super::repository::{date_from_sql, date_to_sql, map_sql_error, now_ts, run_blocking};

pub struct SqliteSeasonRepository {
    db: Arc<DbManager>,
}

impl SqliteSeasonRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeasonRepository for SqliteSeasonRepository {
    async fn find_by_src_id(&self, src_id: SrcId) -> DomainResult<Option<Season>> {
        run_blocking(&self.db, move |conn| {
            conn.query_row(
                "SELECT id, src_id, start_date, end_date, current_match_day
                 FROM seasons WHERE src_id = ?1",
                params![src_id],
                map_season_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
    }

    async fn create(&self, fields: &SeasonFields) -> DomainResult<Season> {
        let fields = fields.clone();
        run_blocking(&self.db, move |conn| {
            let now = now_ts();
            conn.execute(
                "INSERT INTO seasons (src_id, start_date, end_date, current_match_day, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
                params![
                    fields.src_id,
                    date_to_sql(fields.start_date),
                    date_to_sql(fields.end_date),
                    fields.current_match_day,
                    now
                ],
            )
            .map_err(map_sql_error)?;

            Ok(season_from(conn.last_insert_rowid(), fields))
        })
        .await
    }

    async fn update(&self, season: &Season, fields: &SeasonFields) -> DomainResult<Season> {
        let id = season.id;
        let fields = fields.clone();
        run_blocking(&self.db, move |conn| {
            conn.execute(
                "UPDATE seasons
                 SET start_date = ?1, end_date = ?2, current_match_day = ?3, updated_at = ?4
                 WHERE id = ?5",
                params![
                    date_to_sql(fields.start_date),
                    date_to_sql(fields.end_date),
                    fields.current_match_day,
                    now_ts(),
                    id
                ],
            )
            .map_err(map_sql_error)?;

            Ok(season_from(id, fields))
        })
        .await
    }
}

fn season_from(id: i64, fields: SeasonFields) -> Season {
    Season {
        id,
        src_id: fields.src_id,
        start_date: fields.start_date,
        end_date: fields.end_date,
        current_match_day: fields.current_match_day,
    }
}

fn map_season_row(row: &Row<'_>) -> rusqlite::Result<Season> {
    Ok(Season {
        id: row.get(0)?,
        src_id: row.get(1)?,
        start_date: date_from_sql(row.get(2)?),
        end_date: date_from_sql(row.get(3)?),
        current_match_day: row.get(4)?,
    })
}
