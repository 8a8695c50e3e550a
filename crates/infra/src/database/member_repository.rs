//! SQLite implementation of the `MemberRepository` port.

use std::sync::Arc;

use async_trait::async_trait;
use pitchsync_core::MemberRepository;
use pitchsync_domain::{LocalId, Member, MemberFields, Result as DomainResult, SrcId};
use rusqlite::{params, OptionalExtension, Row};

use super::manager::DbManager;
use super::repository::{
    date_from_sql, date_to_sql, insert_links, map_sql_error, now_ts, run_blocking, select_links,
};

const LINK_TEAM_SQL: &str =
    "INSERT OR IGNORE INTO member_teams (member_id, team_id) VALUES (?1, ?2)";
const TEAMS_OF_SQL: &str = "SELECT team_id FROM member_teams WHERE member_id = ?1 ORDER BY team_id";

pub struct SqliteMemberRepository {
    db: Arc<DbManager>,
}

impl SqliteMemberRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepository {
    async fn find_by_src_id(&self, src_id: SrcId) -> DomainResult<Option<Member>> {
        run_blocking(&self.db, move |conn| {
            conn.query_row(
                "SELECT id, src_id, name, position_id, date_of_birth, country_of_birth,
                        nationality, role_id
                 FROM members WHERE src_id = ?1",
                params![src_id],
                map_member_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
    }

    async fn create(&self, fields: &MemberFields) -> DomainResult<Member> {
        let fields = fields.clone();
        run_blocking(&self.db, move |conn| {
            let now = now_ts();
            conn.execute(
                "INSERT INTO members
                    (src_id, name, position_id, date_of_birth, country_of_birth, nationality,
                     role_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
                params![
                    fields.src_id,
                    fields.name,
                    fields.position_id,
                    date_to_sql(fields.date_of_birth),
                    fields.country_of_birth,
                    fields.nationality,
                    fields.role_id,
                    now
                ],
            )
            .map_err(map_sql_error)?;

            Ok(member_from(conn.last_insert_rowid(), fields))
        })
        .await
    }

    async fn update(&self, member: &Member, fields: &MemberFields) -> DomainResult<Member> {
        let id = member.id;
        let fields = fields.clone();
        run_blocking(&self.db, move |conn| {
            conn.execute(
                "UPDATE members
                 SET name = ?1, position_id = ?2, date_of_birth = ?3, country_of_birth = ?4,
                     nationality = ?5, role_id = ?6, updated_at = ?7
                 WHERE id = ?8",
                params![
                    fields.name,
                    fields.position_id,
                    date_to_sql(fields.date_of_birth),
                    fields.country_of_birth,
                    fields.nationality,
                    fields.role_id,
                    now_ts(),
                    id
                ],
            )
            .map_err(map_sql_error)?;

            Ok(member_from(id, fields))
        })
        .await
    }

    async fn add_teams(&self, member_id: LocalId, team_ids: &[LocalId]) -> DomainResult<()> {
        let team_ids = team_ids.to_vec();
        run_blocking(&self.db, move |conn| insert_links(conn, LINK_TEAM_SQL, member_id, &team_ids))
            .await
    }

    async fn team_ids(&self, member_id: LocalId) -> DomainResult<Vec<LocalId>> {
        run_blocking(&self.db, move |conn| select_links(conn, TEAMS_OF_SQL, member_id)).await
    }
}

fn member_from(id: LocalId, fields: MemberFields) -> Member {
    Member {
        id,
        src_id: fields.src_id,
        name: fields.name,
        position_id: fields.position_id,
        date_of_birth: fields.date_of_birth,
        country_of_birth: fields.country_of_birth,
        nationality: fields.nationality,
        role_id: fields.role_id,
    }
}

fn map_member_row(row: &Row<'_>) -> rusqlite::Result<Member> {
    Ok(Member {
        id: row.get(0)?,
        src_id: row.get(1)?,
        name: row.get(2)?,
        position_id: row.get(3)?,
        date_of_birth: date_from_sql(row.get(4)?),
        country_of_birth: row.get(5)?,
        nationality: row.get(6)?,
        role_id: row.get(7)?,
    })
}
