//! CLI argument definitions using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pitchsync_domain::SrcId;

#[derive(Parser, Debug)]
#[command(name = "pitchsync")]
#[command(author, version, about = "Football data synchronizer")]
#[command(
    long_about = "Mirrors areas, competitions, seasons, teams and squads from the football data source into a local SQLite store."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Configuration file (JSON or TOML); environment variables are used when omitted
    #[arg(long, short = 'c', global = true, env = "PITCHSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create or upgrade the store schema
    Migrate,

    /// Insert the default positions and roles
    SeedLookups,

    /// Full run: every area, the designated competition, then its teams and squads
    Run {
        /// Competition to seed the run with (defaults to the configured one)
        #[arg(long)]
        competition: Option<SrcId>,
    },

    /// Synchronize the area tree only
    Areas,

    /// Synchronize one competition and its seasons
    Competition {
        /// Source id of the competition
        id: SrcId,
    },

    /// Synchronize every team listed for a competition
    Teams {
        /// Source id of the competition
        competition_id: SrcId,
    },

    /// Synchronize one team, its competitions and its squad
    Team {
        /// Source id of the team
        id: SrcId,
    },

    /// Row counts of every store table
    Stats,
}

impl Commands {
    /// Stable identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Migrate => "migrate",
            Self::SeedLookups => "seed-lookups",
            Self::Run { .. } => "run",
            Self::Areas => "areas",
            Self::Competition { .. } => "competition",
            Self::Teams { .. } => "teams",
            Self::Team { .. } => "team",
            Self::Stats => "stats",
        }
    }
}
