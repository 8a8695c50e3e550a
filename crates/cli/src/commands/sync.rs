//! Synchronization commands. Every command applies the schema first; member
//! roles must have been seeded with `seed-lookups`.

use pitchsync_core::{SyncReport, SyncRun};
use pitchsync_domain::{PitchSyncError, Result, SrcId};
use serde::Serialize;
use serde_json::{json, Value};

use crate::context::AppContext;

pub async fn full_run(ctx: &AppContext, competition: Option<SrcId>) -> Result<Value> {
    ctx.prepare_store()?;
    let engine = ctx.engine()?;
    let competition_id = competition.unwrap_or(ctx.config.sync.competition_id);

    let report = engine.run(competition_id).await?;
    to_json(&report)
}

pub async fn areas(ctx: &AppContext) -> Result<Value> {
    ctx.prepare_store()?;
    let engine = ctx.engine()?;
    let mut run = SyncRun::new();

    let areas = engine.sync_areas(&mut run).await?;
    outcome(&areas, run.into_report())
}

pub async fn competition(ctx: &AppContext, id: SrcId) -> Result<Value> {
    ctx.prepare_store()?;
    let engine = ctx.engine()?;
    let mut run = SyncRun::new();

    let competition = engine.sync_competition(id, &mut run).await?;
    outcome(&competition, run.into_report())
}

pub async fn competition_teams(ctx: &AppContext, competition_id: SrcId) -> Result<Value> {
    ctx.prepare_store()?;
    let engine = ctx.engine()?;
    let mut run = SyncRun::new();

    let teams = engine.sync_competition_teams(competition_id, &mut run).await?;
    outcome(&teams, run.into_report())
}

pub async fn team(ctx: &AppContext, id: SrcId) -> Result<Value> {
    ctx.prepare_store()?;
    let engine = ctx.engine()?;
    let mut run = SyncRun::new();

    let team = engine.sync_team_by_id(id, &mut run).await?;
    outcome(&team, run.into_report())
}

fn outcome<T: Serialize>(result: &T, report: SyncReport) -> Result<Value> {
    Ok(json!({ "result": to_json(result)?, "report": to_json(&report)? }))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|err| PitchSyncError::Internal(format!("failed to encode output: {err}")))
}
