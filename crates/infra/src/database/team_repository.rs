//! SQLite implementation of the `TeamRepository` port.

use std::sync::Arc;

use async_trait::async_trait;
use pitchsync_core::TeamRepository;
use pitchsync_domain::{LocalId, Result as DomainResult, SrcId, Team, TeamFields};
use rusqlite::{params, OptionalExtension, Row};

use super::manager::DbManager;
use super::repository::{insert_links, map_sql_error, now_ts, run_blocking, select_links};

const LINK_COMPETITION_SQL: &str =
    "INSERT OR IGNORE INTO team_competitions (team_id, competition_id) VALUES (?1, ?2)";
const COMPETITIONS_OF_SQL: &str =
    "SELECT competition_id FROM team_competitions WHERE team_id = ?1 ORDER BY competition_id";

pub struct SqliteTeamRepository {
    db: Arc<DbManager>,
}

impl SqliteTeamRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn find_by_src_id(&self, src_id: SrcId) -> DomainResult<Option<Team>> {
        run_blocking(&self.db, move |conn| {
            conn.query_row(
                "SELECT id, src_id, area_id, name, short_code, address, phone, website, email,
                        founded, colors, venue
                 FROM teams WHERE src_id = ?1",
                params![src_id],
                map_team_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
    }

    async fn create(&self, fields: &TeamFields) -> DomainResult<Team> {
        let fields = fields.clone();
        run_blocking(&self.db, move |conn| {
            let now = now_ts();
            conn.execute(
                "INSERT INTO teams
                    (src_id, area_id, name, short_code, address, phone, website, email, founded,
                     colors, venue, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)",
                params![
                    fields.src_id,
                    fields.area_id,
                    fields.name,
                    fields.short_code,
                    fields.address,
                    fields.phone,
                    fields.website,
                    fields.email,
                    fields.founded,
                    fields.colors,
                    fields.venue,
                    now
                ],
            )
            .map_err(map_sql_error)?;

            Ok(team_from(conn.last_insert_rowid(), fields))
        })
        .await
    }

    async fn update(&self, team: &Team, fields: &TeamFields) -> DomainResult<Team> {
        let id = team.id;
        let fields = fields.clone();
        run_blocking(&self.db, move |conn| {
            conn.execute(
                "UPDATE teams
                 SET area_id = ?1, name = ?2, short_code = ?3, address = ?4, phone = ?5,
                     website = ?6, email = ?7, founded = ?8, colors = ?9, venue = ?10,
                     updated_at = ?11
                 WHERE id = ?12",
                params![
                    fields.area_id,
                    fields.name,
                    fields.short_code,
                    fields.address,
                    fields.phone,
                    fields.website,
                    fields.email,
                    fields.founded,
                    fields.colors,
                    fields.venue,
                    now_ts(),
                    id
                ],
            )
            .map_err(map_sql_error)?;

            Ok(team_from(id, fields))
        })
        .await
    }

    async fn add_competitions(
        &self,
        team_id: LocalId,
        competition_ids: &[LocalId],
    ) -> DomainResult<()> {
        let competition_ids = competition_ids.to_vec();
        run_blocking(&self.db, move |conn| {
            insert_links(conn, LINK_COMPETITION_SQL, team_id, &competition_ids)
        })
        .await
    }

    async fn competition_ids(&self, team_id: LocalId) -> DomainResult<Vec<LocalId>> {
        run_blocking(&self.db, move |conn| select_links(conn, COMPETITIONS_OF_SQL, team_id)).await
    }
}

fn team_from(id: LocalId, fields: TeamFields) -> Team {
    Team {
        id,
        src_id: fields.src_id,
        area_id: fields.area_id,
        name: fields.name,
        short_code: fields.short_code,
        address: fields.address,
        phone: fields.phone,
        website: fields.website,
        email: fields.email,
        founded: fields.founded,
        colors: fields.colors,
        venue: fields.venue,
    }
}

fn map_team_row(row: &Row<'_>) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get(0)?,
        src_id: row.get(1)?,
        area_id: row.get(2)?,
        name: row.get(3)?,
        short_code: row.get(4)?,
        address: row.get(5)?,
        phone: row.get(6)?,
        website: row.get(7)?,
        email: row.get(8)?,
        founded: row.get(9)?,
        colors: row.get(10)?,
        venue: row.get(11)?,
    })
}
