//! Synchronization engine - wiring and run orchestration
//!
//! The per-entity synchronizers live in sibling modules as further `impl`
//! blocks on [`SyncEngine`].

use std::sync::Arc;

use pitchsync_domain::constants::WORLD_AREA_SRC_ID;
use pitchsync_domain::{Area, OrphanPolicy, PitchSyncError, Result, SrcId, SyncConfig};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use super::endpoints::SourceEndpoints;
use super::ports::{Fetcher, SyncRepositories};
use super::run::{SyncReport, SyncRun};

/// Behavioural switches of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    pub root_area_id: SrcId,
    pub orphan_policy: OrphanPolicy,
    pub skip_invalid_members: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            root_area_id: WORLD_AREA_SRC_ID,
            orphan_policy: OrphanPolicy::Fail,
            skip_invalid_members: false,
        }
    }
}

impl From<&SyncConfig> for SyncOptions {
    fn from(config: &SyncConfig) -> Self {
        Self {
            root_area_id: config.root_area_id,
            orphan_policy: config.orphan_policy,
            skip_invalid_members: config.skip_invalid_members,
        }
    }
}

/// Synchronizes the source's entity graph into the local store.
pub struct SyncEngine {
    pub(crate) fetcher: Arc<dyn Fetcher>,
    pub(crate) repos: SyncRepositories,
    pub(crate) endpoints: SourceEndpoints,
    pub(crate) options: SyncOptions,
}

impl SyncEngine {
    /// Create an engine with default options.
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        repos: SyncRepositories,
        endpoints: SourceEndpoints,
    ) -> Self {
        Self { fetcher, repos, endpoints, options: SyncOptions::default() }
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    /// Full run: every area, then the designated competition, then that
    /// competition's team list (and transitively their competitions and
    /// squads).
    #[instrument(skip(self))]
    pub async fn run(&self, competition_id: SrcId) -> Result<SyncReport> {
        info!("starting synchronization run");
        let mut run = SyncRun::new();

        self.sync_areas(&mut run).await?;
        self.sync_competition(competition_id, &mut run).await?;
        self.sync_competition_teams(competition_id, &mut run).await?;

        let report = run.into_report();
        info!(
            areas = report.areas.total(),
            seasons = report.seasons.total(),
            competitions = report.competitions.total(),
            teams = report.teams.total(),
            members = report.members.total(),
            skipped_competitions = report.skipped_competitions.len(),
            "synchronization run completed"
        );
        Ok(report)
    }

    /// Fetch a resource and decode it into a source payload type.
    pub(crate) async fn fetch_as<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "fetching source resource");
        let document = self.fetcher.fetch(url).await?;
        serde_json::from_value(document)
            .map_err(|err| PitchSyncError::Source(format!("unexpected payload from {url}: {err}")))
    }

    /// Area that must already exist (resolved this run or stored earlier).
    pub(crate) async fn existing_area(&self, src_id: SrcId, run: &SyncRun) -> Result<Area> {
        self.known_area(src_id, run)
            .await?
            .ok_or_else(|| PitchSyncError::NotFound(format!("area {src_id} has not been synchronized")))
    }

    pub(crate) async fn known_area(&self, src_id: SrcId, run: &SyncRun) -> Result<Option<Area>> {
        if let Some(area) = run.resolved_area(src_id) {
            return Ok(Some(area.clone()));
        }
        self.repos.areas.find_by_src_id(src_id).await
    }
}
