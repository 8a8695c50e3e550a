//! SQLite implementation of the `CompetitionRepository` port.

use std::sync::Arc;

use async_trait::async_trait;
use pitchsync_core::CompetitionRepository;
use pitchsync_domain::{
    Competition, CompetitionFields, LocalId, Result as DomainResult, SrcId,
};
use rusqlite::{params, OptionalExtension, Row};

use super::manager::DbManager;
use super::repository::{insert_links, map_sql_error, now_ts, run_blocking, select_links};

const LINK_SEASON_SQL: &str =
    "INSERT OR IGNORE INTO competition_seasons (competition_id, season_id) VALUES (?1, ?2)";
const SEASONS_OF_SQL: &str =
    "SELECT season_id FROM competition_seasons WHERE competition_id = ?1 ORDER BY season_id";

pub struct SqliteCompetitionRepository {
    db: Arc<DbManager>,
}

impl SqliteCompetitionRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompetitionRepository for SqliteCompetitionRepository {
    async fn find_by_src_id(&self, src_id: SrcId) -> DomainResult<Option<Competition>> {
        run_blocking(&self.db, move |conn| {
            conn.query_row(
                "SELECT id, src_id, name, code, area_id, plan, current_season_id
                 FROM competitions WHERE src_id = ?1",
                params![src_id],
                map_competition_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
    }

    async fn create(&self, fields: &CompetitionFields) -> DomainResult<Competition> {
        let fields = fields.clone();
        run_blocking(&self.db, move |conn| {
            let now = now_ts();
            conn.execute(
                "INSERT INTO competitions
                    (src_id, name, code, area_id, plan, current_season_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
                params![
                    fields.src_id,
                    fields.name,
                    fields.code,
                    fields.area_id,
                    fields.plan,
                    fields.current_season_id,
                    now
                ],
            )
            .map_err(map_sql_error)?;

            Ok(competition_from(conn.last_insert_rowid(), fields))
        })
        .await
    }

    async fn update(
        &self,
        competition: &Competition,
        fields: &CompetitionFields,
    ) -> DomainResult<Competition> {
        let id = competition.id;
        let fields = fields.clone();
        run_blocking(&self.db, move |conn| {
            conn.execute(
                "UPDATE competitions
                 SET name = ?1, code = ?2, area_id = ?3, plan = ?4, current_season_id = ?5,
                     updated_at = ?6
                 WHERE id = ?7",
                params![
                    fields.name,
                    fields.code,
                    fields.area_id,
                    fields.plan,
                    fields.current_season_id,
                    now_ts(),
                    id
                ],
            )
            .map_err(map_sql_error)?;

            Ok(competition_from(id, fields))
        })
        .await
    }

    async fn add_seasons(&self, competition_id: LocalId, season_ids: &[LocalId]) -> DomainResult<()> {
        let season_ids = season_ids.to_vec();
        run_blocking(&self.db, move |conn| {
            insert_links(conn, LINK_SEASON_SQL, competition_id, &season_ids)
        })
        .await
    }

    async fn season_ids(&self, competition_id: LocalId) -> DomainResult<Vec<LocalId>> {
        run_blocking(&self.db, move |conn| select_links(conn, SEASONS_OF_SQL, competition_id)).await
    }
}

fn competition_from(id: LocalId, fields: CompetitionFields) -> Competition {
    Competition {
        id,
        src_id: fields.src_id,
        name: fields.name,
        code: fields.code,
        area_id: fields.area_id,
        plan: fields.plan,
        current_season_id: fields.current_season_id,
    }
}

fn map_competition_row(row: &Row<'_>) -> rusqlite::Result<Competition> {
    Ok(Competition {
        id: row.get(0)?,
        src_id: row.get(1)?,
        name: row.get(2)?,
        code: row.get(3)?,
        area_id: row.get(4)?,
        plan: row.get(5)?,
        current_season_id: row.get(6)?,
    })
}
