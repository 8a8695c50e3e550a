//! Position and role lookup tables.
//!
//! The engine only reads these; [`SqliteLookupRepository::seed_defaults`] is
//! the administrative path that fills them.

use std::sync::Arc;

use async_trait::async_trait;
use pitchsync_core::LookupRepository;
use pitchsync_domain::constants::{DEFAULT_POSITIONS, DEFAULT_ROLES};
use pitchsync_domain::{LookupValue, Result as DomainResult};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use super::manager::DbManager;
use super::repository::{map_sql_error, run_blocking};

#[derive(Debug, Clone, Copy)]
enum LookupTable {
    Positions,
    Roles,
}

impl LookupTable {
    fn name(self) -> &'static str {
        match self {
            Self::Positions => "positions",
            Self::Roles => "roles",
        }
    }
}

pub struct SqliteLookupRepository {
    db: Arc<DbManager>,
}

impl SqliteLookupRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Insert the default positions and roles. Returns the number of rows
    /// actually added; existing names are left untouched.
    pub async fn seed_defaults(&self) -> DomainResult<usize> {
        let inserted = run_blocking(&self.db, |conn| {
            let tx = conn.transaction().map_err(map_sql_error)?;
            let mut inserted = 0;
            for (table, names) in
                [(LookupTable::Positions, DEFAULT_POSITIONS), (LookupTable::Roles, DEFAULT_ROLES)]
            {
                let sql = format!("INSERT OR IGNORE INTO {} (name) VALUES (?1)", table.name());
                for name in names {
                    inserted += tx.execute(&sql, params![name]).map_err(map_sql_error)?;
                }
            }
            tx.commit().map_err(map_sql_error)?;
            Ok(inserted)
        })
        .await?;

        info!(inserted, "lookup tables seeded");
        Ok(inserted)
    }

    pub async fn positions(&self) -> DomainResult<Vec<LookupValue>> {
        run_blocking(&self.db, |conn| list_values(conn, LookupTable::Positions)).await
    }

    pub async fn roles(&self) -> DomainResult<Vec<LookupValue>> {
        run_blocking(&self.db, |conn| list_values(conn, LookupTable::Roles)).await
    }
}

#[async_trait]
impl LookupRepository for SqliteLookupRepository {
    async fn position_by_name(&self, name: &str) -> DomainResult<Option<LookupValue>> {
        let name = name.to_owned();
        run_blocking(&self.db, move |conn| find_value(conn, LookupTable::Positions, &name)).await
    }

    async fn role_by_name(&self, name: &str) -> DomainResult<Option<LookupValue>> {
        let name = name.to_owned();
        run_blocking(&self.db, move |conn| find_value(conn, LookupTable::Roles, &name)).await
    }
}

fn find_value(conn: &Connection, table: LookupTable, name: &str) -> DomainResult<Option<LookupValue>> {
    conn.query_row(
        &format!("SELECT id, name FROM {} WHERE name = ?1", table.name()),
        params![name],
        |row| Ok(LookupValue { id: row.get(0)?, name: row.get(1)? }),
    )
    .optional()
    .map_err(map_sql_error)
}

fn list_values(conn: &Connection, table: LookupTable) -> DomainResult<Vec<LookupValue>> {
    let mut stmt = conn
        .prepare(&format!("SELECT id, name FROM {} ORDER BY id", table.name()))
        .map_err(map_sql_error)?;
    let rows = stmt
        .query_map([], |row| Ok(LookupValue { id: row.get(0)?, name: row.get(1)? }))
        .map_err(map_sql_error)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
}
