//! Team synchronization
//!
//! A team links to its active competitions, each of which is synchronized
//! first. This is the one place a forbidden competition is skipped instead of
//! failing the enclosing sync.

use pitchsync_domain::{
    EntityKind, LocalId, PitchSyncError, Result, SrcId, Team, TeamFields, TeamListResponse,
    TeamRecord,
};
use tracing::{info, instrument, warn};

use super::run::SyncRun;
use super::service::SyncEngine;

impl SyncEngine {
    /// Upsert a team from its detail payload, link its accessible active
    /// competitions and synchronize its squad.
    #[instrument(skip(self, payload, run), fields(src_id = payload.id))]
    pub async fn sync_team(&self, payload: &TeamRecord, run: &mut SyncRun) -> Result<Team> {
        if let Some(team) = run.teams.get(&payload.id) {
            return Ok(team.clone());
        }

        let area = self.existing_area(payload.area.id, run).await?;

        let mut competition_ids: Vec<LocalId> =
            Vec::with_capacity(payload.active_competitions.len());
        for reference in &payload.active_competitions {
            match self.sync_competition(reference.id, run).await {
                Ok(competition) => {
                    if !competition_ids.contains(&competition.id) {
                        competition_ids.push(competition.id);
                    }
                }
                Err(PitchSyncError::PermissionDenied(reason)) => {
                    warn!(
                        team = payload.id,
                        competition = reference.id,
                        %reason,
                        "access to competition denied; not linking it"
                    );
                    run.report_mut().skip_competition(reference.id);
                }
                Err(err) => return Err(err),
            }
        }

        let fields = team_fields(payload, area.id);
        let (team, created) = match self.repos.teams.find_by_src_id(payload.id).await? {
            Some(existing) => (self.repos.teams.update(&existing, &fields).await?, false),
            None => (self.repos.teams.create(&fields).await?, true),
        };
        run.report_mut().record(EntityKind::Team, created);
        self.repos.teams.add_competitions(team.id, &competition_ids).await?;
        run.teams.insert(team.src_id, team.clone());

        info!(
            src_id = team.src_id,
            name = %team.name,
            competitions = competition_ids.len(),
            squad = payload.squad.len(),
            created,
            "synchronized team"
        );

        for member in &payload.squad {
            match self.sync_member(member, team.src_id, run).await {
                Ok(_) => {}
                Err(err) if self.options.skip_invalid_members && err.is_missing_lookup() => {
                    warn!(team = team.src_id, member = member.id, error = %err, "skipping member");
                    run.report_mut().skip_member(member.id);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(team)
    }

    /// Fetch a team's detail by natural key and synchronize it.
    #[instrument(skip(self, run))]
    pub async fn sync_team_by_id(&self, src_id: SrcId, run: &mut SyncRun) -> Result<Team> {
        if let Some(team) = run.teams.get(&src_id) {
            return Ok(team.clone());
        }
        let payload: TeamRecord = self.fetch_as(&self.endpoints.team_detail(src_id)).await?;
        self.sync_team(&payload, run).await
    }

    /// Synchronize every team listed for a competition.
    #[instrument(skip(self, run))]
    pub async fn sync_competition_teams(
        &self,
        competition_id: SrcId,
        run: &mut SyncRun,
    ) -> Result<Vec<Team>> {
        let listing: TeamListResponse =
            self.fetch_as(&self.endpoints.competition_teams(competition_id)).await?;

        let mut teams = Vec::with_capacity(listing.teams.len());
        for reference in &listing.teams {
            teams.push(self.sync_team_by_id(reference.id, run).await?);
        }

        info!(competition = competition_id, count = teams.len(), "teams synchronized");
        Ok(teams)
    }
}

fn team_fields(payload: &TeamRecord, area_id: LocalId) -> TeamFields {
    TeamFields {
        src_id: payload.id,
        area_id,
        name: payload.name.clone(),
        short_code: payload.tla.clone(),
        address: payload.address.clone(),
        phone: payload.phone.clone(),
        website: payload.website.clone(),
        email: payload.email.clone(),
        founded: payload.founded,
        colors: payload.club_colors.clone(),
        venue: payload.venue.clone(),
    }
}
