//! Member synchronization

use pitchsync_domain::{
    EntityKind, LocalId, Member, MemberFields, MemberRecord, PitchSyncError, Result, SrcId,
};
use tracing::{debug, warn};

use super::run::SyncRun;
use super::service::SyncEngine;
use crate::utils::dates::parse_birth_date;

const NO_ROLE: &str = "<none>";

impl SyncEngine {
    /// Upsert a squad member and link it to the team with natural key
    /// `team_key`.
    ///
    /// An unknown position is stored as unset. An unknown role fails with
    /// `MissingLookup` before anything is written.
    pub async fn sync_member(
        &self,
        payload: &MemberRecord,
        team_key: SrcId,
        run: &mut SyncRun,
    ) -> Result<Member> {
        let (member, created) = self.upsert_member(payload, team_key, run).await?;
        run.report_mut().record(EntityKind::Member, created);
        Ok(member)
    }

    async fn upsert_member(
        &self,
        payload: &MemberRecord,
        team_key: SrcId,
        run: &SyncRun,
    ) -> Result<(Member, bool)> {
        let role_id = self.resolve_role(payload).await?;
        let position_id = self.resolve_position(payload).await?;
        let team_id = self.team_local_id(team_key, run).await?;

        let fields = MemberFields {
            src_id: payload.id,
            name: payload.name.clone(),
            position_id,
            date_of_birth: parse_birth_date(payload.date_of_birth.as_deref()),
            country_of_birth: payload.country_of_birth.clone(),
            nationality: payload.nationality.clone(),
            role_id,
        };

        let (member, created) = match self.repos.members.find_by_src_id(payload.id).await? {
            Some(existing) => (self.repos.members.update(&existing, &fields).await?, false),
            None => (self.repos.members.create(&fields).await?, true),
        };
        self.repos.members.add_teams(member.id, &[team_id]).await?;

        debug!(src_id = member.src_id, team = team_key, created, "synchronized member");
        Ok((member, created))
    }

    async fn resolve_role(&self, payload: &MemberRecord) -> Result<LocalId> {
        let name = payload.role.as_deref().unwrap_or(NO_ROLE);
        let role = match payload.role.as_deref() {
            Some(name) => self.repos.lookups.role_by_name(name).await?,
            None => None,
        };
        role.map(|value| value.id).ok_or_else(|| PitchSyncError::MissingLookup {
            kind: "role".to_string(),
            name: name.to_string(),
        })
    }

    async fn resolve_position(&self, payload: &MemberRecord) -> Result<Option<LocalId>> {
        let Some(name) = payload.position.as_deref() else {
            return Ok(None);
        };
        let position = self.repos.lookups.position_by_name(name).await?;
        if position.is_none() {
            warn!(src_id = payload.id, position = name, "unknown position; storing member without one");
        }
        Ok(position.map(|value| value.id))
    }

    async fn team_local_id(&self, team_key: SrcId, run: &SyncRun) -> Result<LocalId> {
        if let Some(team) = run.teams.get(&team_key) {
            return Ok(team.id);
        }
        self.repos
            .teams
            .find_by_src_id(team_key)
            .await?
            .map(|team| team.id)
            .ok_or_else(|| PitchSyncError::NotFound(format!("team {team_key} has not been synchronized")))
    }
}
