//! Store maintenance commands.

use pitchsync_domain::{PitchSyncError, Result};
use serde_json::{json, Value};
use tracing::info;

use crate::context::AppContext;

pub async fn migrate(ctx: &AppContext) -> Result<Value> {
    ctx.prepare_store()?;
    ctx.db.health_check()?;
    info!(path = %ctx.db.path().display(), "schema applied");
    Ok(json!({ "migrated": true, "path": ctx.db.path().display().to_string() }))
}

pub async fn seed_lookups(ctx: &AppContext) -> Result<Value> {
    ctx.prepare_store()?;
    let inserted = ctx.lookups.seed_defaults().await?;
    let positions = ctx.lookups.positions().await?;
    let roles = ctx.lookups.roles().await?;

    Ok(json!({
        "inserted": inserted,
        "positions": positions.iter().map(|value| &value.name).collect::<Vec<_>>(),
        "roles": roles.iter().map(|value| &value.name).collect::<Vec<_>>(),
    }))
}

pub async fn stats(ctx: &AppContext) -> Result<Value> {
    ctx.prepare_store()?;
    let tables = ctx.stats.table_stats().await?;
    serde_json::to_value(tables)
        .map_err(|err| PitchSyncError::Internal(format!("failed to encode stats: {err}")))
}

#[cfg(test)]
mod tests {
    use pitchsync_domain::Config;
    use tempfile::TempDir;

    use super::*;

    fn context(dir: &TempDir) -> AppContext {
        let mut config = Config::default();
        config.database.path = dir.path().join("cmd.db").display().to_string();
        AppContext::with_config(config).unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn seed_lookups_reports_inserted_rows_once() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        let first = seed_lookups(&ctx).await.unwrap();
        let second = seed_lookups(&ctx).await.unwrap();

        assert_eq!(first["inserted"], 8);
        assert_eq!(second["inserted"], 0);
        assert_eq!(first["roles"][0], "PLAYER");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn stats_lists_every_table_on_a_fresh_store() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        let value = stats(&ctx).await.unwrap();
        let tables = value.as_array().expect("stats is a list");
        assert_eq!(tables.len(), 10);
        assert!(tables.iter().all(|table| table["row_count"] == 0));
    }
}
