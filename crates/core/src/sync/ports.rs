//! Port interfaces for sync operations
//!
//! The engine reaches the outside world only through these traits: a
//! [`Fetcher`] for the remote data source and one repository per entity kind
//! for the local store. Repositories look entities up by natural key
//! (`src_id`); `create` and `update` write the full field set, and the
//! `add_*` association methods are additive (re-adding an existing member is a
//! no-op).

#![deny(missing_docs)]

use std::sync::Arc;

use async_trait::async_trait;
use pitchsync_domain::{
    Area, AreaUpdate, Competition, CompetitionFields, LocalId, LookupValue, Member, MemberFields,
    NewArea, Result, Season, SeasonFields, SrcId, Team, TeamFields,
};
use serde_json::Value;

/// Single logical retrieval of a JSON resource.
///
/// Implementations own authentication and rate-limit backoff; a forbidden
/// resource surfaces as `PitchSyncError::PermissionDenied`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Retrieve and decode the resource at `url`.
    async fn fetch(&self, url: &str) -> Result<Value>;
}

/// Store of the area tree.
#[async_trait]
pub trait AreaRepository: Send + Sync {
    /// Area stored under the source id, if any.
    async fn find_by_src_id(&self, src_id: SrcId) -> Result<Option<Area>>;

    /// Insert a new area; `parent_id` must already name a stored area.
    async fn create(&self, area: &NewArea) -> Result<Area>;

    /// Overwrite name and code. Parent linkage is left untouched.
    async fn update(&self, area: &Area, fields: &AreaUpdate) -> Result<Area>;
}

/// Store of seasons, shared across competitions.
#[async_trait]
pub trait SeasonRepository: Send + Sync {
    /// Season stored under the source id, if any.
    async fn find_by_src_id(&self, src_id: SrcId) -> Result<Option<Season>>;

    /// Insert a season with its dates and matchday.
    async fn create(&self, fields: &SeasonFields) -> Result<Season>;

    /// Overwrite dates and current matchday of an existing season.
    async fn update(&self, season: &Season, fields: &SeasonFields) -> Result<Season>;
}

/// Store of competitions and their season history.
#[async_trait]
pub trait CompetitionRepository: Send + Sync {
    /// Competition stored under the source id, if any.
    async fn find_by_src_id(&self, src_id: SrcId) -> Result<Option<Competition>>;

    /// Insert a competition. Season links are added separately.
    async fn create(&self, fields: &CompetitionFields) -> Result<Competition>;

    /// Overwrite every scalar field, including area and current season.
    async fn update(
        &self,
        competition: &Competition,
        fields: &CompetitionFields,
    ) -> Result<Competition>;

    /// Add seasons to the competition's history (additive union).
    async fn add_seasons(&self, competition_id: LocalId, season_ids: &[LocalId]) -> Result<()>;

    /// Local ids of every season linked to the competition.
    async fn season_ids(&self, competition_id: LocalId) -> Result<Vec<LocalId>>;
}

/// Store of teams and their active competitions.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Team stored under the source id, if any.
    async fn find_by_src_id(&self, src_id: SrcId) -> Result<Option<Team>>;

    /// Insert a team. Competition links are added separately.
    async fn create(&self, fields: &TeamFields) -> Result<Team>;

    /// Overwrite the team's descriptive fields and area.
    async fn update(&self, team: &Team, fields: &TeamFields) -> Result<Team>;

    /// Link active competitions to the team (additive union).
    async fn add_competitions(&self, team_id: LocalId, competition_ids: &[LocalId])
        -> Result<()>;

    /// Local ids of every competition linked to the team.
    async fn competition_ids(&self, team_id: LocalId) -> Result<Vec<LocalId>>;
}

/// Store of squad members and their team memberships.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Member stored under the source id, if any.
    async fn find_by_src_id(&self, src_id: SrcId) -> Result<Option<Member>>;

    /// Insert a player or staff member. Team links are added separately.
    async fn create(&self, fields: &MemberFields) -> Result<Member>;

    /// Overwrite personal details, position and role.
    async fn update(&self, member: &Member, fields: &MemberFields) -> Result<Member>;

    /// Record team membership (additive union).
    async fn add_teams(&self, member_id: LocalId, team_ids: &[LocalId]) -> Result<()>;

    /// Local ids of every team the member belongs to.
    async fn team_ids(&self, member_id: LocalId) -> Result<Vec<LocalId>>;
}

/// Read-only access to the pre-seeded position and role tables.
#[async_trait]
pub trait LookupRepository: Send + Sync {
    /// Position row whose name matches exactly.
    async fn position_by_name(&self, name: &str) -> Result<Option<LookupValue>>;

    /// Role row whose name matches exactly.
    async fn role_by_name(&self, name: &str) -> Result<Option<LookupValue>>;
}

/// Bundle of every store port the engine writes through.
#[derive(Clone)]
pub struct SyncRepositories {
    /// Area tree.
    pub areas: Arc<dyn AreaRepository>,
    /// Seasons referenced by competitions.
    pub seasons: Arc<dyn SeasonRepository>,
    /// Competitions and their season history.
    pub competitions: Arc<dyn CompetitionRepository>,
    /// Teams and their active competitions.
    pub teams: Arc<dyn TeamRepository>,
    /// Squad members and their teams.
    pub members: Arc<dyn MemberRepository>,
    /// Position and role lookups used while syncing squads.
    pub lookups: Arc<dyn LookupRepository>,
}
