//! Read-only store introspection: per-table row counts and association
//! listings by natural key.

use std::sync::Arc;

use pitchsync_domain::{Result as DomainResult, SrcId, TableStats};
use rusqlite::params;

use super::manager::DbManager;
use super::repository::{map_sql_error, run_blocking};

const COUNTED_TABLES: &[&str] = &[
    "areas",
    "seasons",
    "competitions",
    "competition_seasons",
    "teams",
    "team_competitions",
    "positions",
    "roles",
    "members",
    "member_teams",
];

pub struct SqliteStatsRepository {
    db: Arc<DbManager>,
}

impl SqliteStatsRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Row counts of every store table.
    pub async fn table_stats(&self) -> DomainResult<Vec<TableStats>> {
        run_blocking(&self.db, |conn| {
            let mut stats = Vec::with_capacity(COUNTED_TABLES.len());
            for name in COUNTED_TABLES {
                // Identifiers cannot be bound as parameters; the list is static.
                let count: i64 = conn
                    .query_row(&format!("SELECT COUNT(*) FROM \"{name}\""), [], |row| row.get(0))
                    .map_err(map_sql_error)?;
                stats.push(TableStats { name: (*name).to_string(), row_count: count.max(0) as u64 });
            }
            Ok(stats)
        })
        .await
    }

    /// Natural keys of the seasons linked to a competition.
    pub async fn competition_season_keys(&self, competition: SrcId) -> DomainResult<Vec<SrcId>> {
        self.linked_keys(
            "SELECT s.src_id FROM competition_seasons cs
             JOIN competitions c ON c.id = cs.competition_id
             JOIN seasons s ON s.id = cs.season_id
             WHERE c.src_id = ?1 ORDER BY s.src_id",
            competition,
        )
        .await
    }

    /// Natural keys of the competitions linked to a team.
    pub async fn team_competition_keys(&self, team: SrcId) -> DomainResult<Vec<SrcId>> {
        self.linked_keys(
            "SELECT c.src_id FROM team_competitions tc
             JOIN teams t ON t.id = tc.team_id
             JOIN competitions c ON c.id = tc.competition_id
             WHERE t.src_id = ?1 ORDER BY c.src_id",
            team,
        )
        .await
    }

    /// Natural keys of the teams a member belongs to.
    pub async fn member_team_keys(&self, member: SrcId) -> DomainResult<Vec<SrcId>> {
        self.linked_keys(
            "SELECT t.src_id FROM member_teams mt
             JOIN members m ON m.id = mt.member_id
             JOIN teams t ON t.id = mt.team_id
             WHERE m.src_id = ?1 ORDER BY t.src_id",
            member,
        )
        .await
    }

    async fn linked_keys(&self, sql: &'static str, owner: SrcId) -> DomainResult<Vec<SrcId>> {
        run_blocking(&self.db, move |conn| {
            let mut stmt = conn.prepare_cached(sql).map_err(map_sql_error)?;
            let rows = stmt.query_map(params![owner], |row| row.get(0)).map_err(map_sql_error)?;
            rows.collect::<rusqlite::Result<Vec<SrcId>>>().map_err(map_sql_error)
        })
        .await
    }
}
