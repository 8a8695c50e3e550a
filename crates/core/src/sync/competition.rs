//! Competition synchronization
//!
//! A competition is written after its seasons and its area. Permission
//! failures from the fetcher propagate unchanged; the team synchronizer is the
//! only caller that absorbs them. Outcomes, denials included, are remembered
//! for the rest of the run so a competition reached from many teams is fetched
//! once.

use pitchsync_domain::{
    Competition, CompetitionFields, CompetitionRecord, EntityKind, LocalId, PitchSyncError,
    Result, SrcId,
};
use tracing::{info, instrument};

use super::run::{CompetitionOutcome, SyncRun};
use super::service::SyncEngine;

impl SyncEngine {
    /// Fetch and upsert a competition together with its current season and
    /// season history.
    #[instrument(skip(self, run))]
    pub async fn sync_competition(&self, src_id: SrcId, run: &mut SyncRun) -> Result<Competition> {
        match run.competitions.get(&src_id) {
            Some(CompetitionOutcome::Synced(competition)) => return Ok(competition.clone()),
            Some(CompetitionOutcome::Denied(message)) => {
                return Err(PitchSyncError::PermissionDenied(message.clone()));
            }
            None => {}
        }

        let url = self.endpoints.competition_detail(src_id);
        let payload: CompetitionRecord = match self.fetch_as(&url).await {
            Ok(payload) => payload,
            Err(PitchSyncError::PermissionDenied(message)) => {
                run.competitions.insert(src_id, CompetitionOutcome::Denied(message.clone()));
                return Err(PitchSyncError::PermissionDenied(message));
            }
            Err(err) => return Err(err),
        };

        let competition = self.store_competition(&payload, run).await?;
        run.competitions.insert(src_id, CompetitionOutcome::Synced(competition.clone()));
        Ok(competition)
    }

    async fn store_competition(
        &self,
        payload: &CompetitionRecord,
        run: &mut SyncRun,
    ) -> Result<Competition> {
        let mut season_ids: Vec<LocalId> = Vec::with_capacity(payload.seasons.len() + 1);

        let current_season = match &payload.current_season {
            Some(record) => {
                let season = self.sync_season(record, run).await?;
                season_ids.push(season.id);
                Some(season)
            }
            None => None,
        };

        for record in &payload.seasons {
            let id = match &current_season {
                Some(current) if current.src_id == record.id => current.id,
                _ => self.sync_season(record, run).await?.id,
            };
            if !season_ids.contains(&id) {
                season_ids.push(id);
            }
        }

        let area = self.existing_area(payload.area.id, run).await?;
        let fields = CompetitionFields {
            src_id: payload.id,
            name: payload.name.clone(),
            code: payload.code.clone(),
            area_id: area.id,
            plan: payload.plan.clone(),
            current_season_id: current_season.as_ref().map(|season| season.id),
        };

        let (competition, created) =
            match self.repos.competitions.find_by_src_id(payload.id).await? {
                Some(existing) => (self.repos.competitions.update(&existing, &fields).await?, false),
                None => (self.repos.competitions.create(&fields).await?, true),
            };
        run.report_mut().record(EntityKind::Competition, created);
        info!(
            src_id = competition.src_id,
            name = %competition.name,
            seasons = season_ids.len(),
            created,
            "synchronized competition"
        );

        self.repos.competitions.add_seasons(competition.id, &season_ids).await?;
        Ok(competition)
    }
}
