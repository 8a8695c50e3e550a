//! Command handlers. Each handler returns a JSON document that `main`
//! prints to stdout.

pub mod database;
pub mod sync;

use std::time::Instant;

use pitchsync_domain::Result;
use serde_json::Value;
use tracing::info;

use crate::cli::Commands;
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Run one command against the context.
pub async fn dispatch(ctx: &AppContext, command: &Commands) -> Result<Value> {
    let start = Instant::now();
    info!(command = command.name(), "executing command");

    let result = match command {
        Commands::Migrate => database::migrate(ctx).await,
        Commands::SeedLookups => database::seed_lookups(ctx).await,
        Commands::Stats => database::stats(ctx).await,
        Commands::Run { competition } => sync::full_run(ctx, *competition).await,
        Commands::Areas => sync::areas(ctx).await,
        Commands::Competition { id } => sync::competition(ctx, *id).await,
        Commands::Teams { competition_id } => sync::competition_teams(ctx, *competition_id).await,
        Commands::Team { id } => sync::team(ctx, *id).await,
    };

    log_command_execution(command.name(), start.elapsed(), result.as_ref().err());
    result
}
