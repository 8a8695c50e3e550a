//! SQLite implementation of the `AreaRepository` port.

use std::sync::Arc;

use async_trait::async_trait;
use pitchsync_core::AreaRepository;
use pitchsync_domain::{Area, AreaUpdate, NewArea, Result as DomainResult, SrcId};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::manager::DbManager;
use super::repository::{map_sql_error, now_ts, run_blocking};

const AREA_COLUMNS: &str = "id, src_id, name, code, parent_id";

pub struct SqliteAreaRepository {
    db: Arc<DbManager>,
}

impl SqliteAreaRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Every stored area ordered by natural key.
    pub async fn list(&self) -> DomainResult<Vec<Area>> {
        run_blocking(&self.db, |conn| {
            let mut stmt = conn
                .prepare(&format!("SELECT {AREA_COLUMNS} FROM areas ORDER BY src_id"))
                .map_err(map_sql_error)?;
            let rows = stmt.query_map([], map_area_row).map_err(map_sql_error)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
        })
        .await
    }
}

#[async_trait]
impl AreaRepository for SqliteAreaRepository {
    async fn find_by_src_id(&self, src_id: SrcId) -> DomainResult<Option<Area>> {
        run_blocking(&self.db, move |conn| find_area(conn, src_id)).await
    }

    async fn create(&self, area: &NewArea) -> DomainResult<Area> {
        let area = area.clone();
        run_blocking(&self.db, move |conn| {
            let now = now_ts();
            conn.execute(
                "INSERT INTO areas (src_id, name, code, parent_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
                params![area.src_id, area.name, area.code, area.parent_id, now],
            )
            .map_err(map_sql_error)?;

            Ok(Area {
                id: conn.last_insert_rowid(),
                src_id: area.src_id,
                name: area.name,
                code: area.code,
                parent_id: area.parent_id,
            })
        })
        .await
    }

    async fn update(&self, area: &Area, fields: &AreaUpdate) -> DomainResult<Area> {
        let mut updated = area.clone();
        updated.name = fields.name.clone();
        updated.code = fields.code.clone();

        run_blocking(&self.db, move |conn| {
            conn.execute(
                "UPDATE areas SET name = ?1, code = ?2, updated_at = ?3 WHERE id = ?4",
                params![updated.name, updated.code, now_ts(), updated.id],
            )
            .map_err(map_sql_error)?;
            Ok(updated)
        })
        .await
    }
}

fn find_area(conn: &Connection, src_id: SrcId) -> DomainResult<Option<Area>> {
    conn.query_row(
        &format!("SELECT {AREA_COLUMNS} FROM areas WHERE src_id = ?1"),
        params![src_id],
        map_area_row,
    )
    .optional()
    .map_err(map_sql_error)
}

fn map_area_row(row: &Row<'_>) -> rusqlite::Result<Area> {
    Ok(Area {
        id: row.get(0)?,
        src_id: row.get(1)?,
        name: row.get(2)?,
        code: row.get(3)?,
        parent_id: row.get(4)?,
    })
}
