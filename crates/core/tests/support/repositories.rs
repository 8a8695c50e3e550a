//! In-memory implementations of the store ports.
//!
//! One [`MemoryStore`] backs all six repositories so tests can inspect the
//! whole entity graph after a run. Set associations are kept in `BTreeSet`s,
//! which gives them the same additive, duplicate-free behaviour as the SQLite
//! association tables.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pitchsync_core::{
    AreaRepository, CompetitionRepository, LookupRepository, MemberRepository, SeasonRepository,
    SyncRepositories, TeamRepository,
};
use pitchsync_domain::{
    Area, AreaUpdate, Competition, CompetitionFields, LocalId, LookupValue, Member, MemberFields,
    NewArea, Result as DomainResult, Season, SeasonFields, SrcId, Team, TeamFields,
};

#[derive(Default)]
struct State {
    next_id: LocalId,
    areas: BTreeMap<SrcId, Area>,
    seasons: BTreeMap<SrcId, Season>,
    competitions: BTreeMap<SrcId, Competition>,
    teams: BTreeMap<SrcId, Team>,
    members: BTreeMap<SrcId, Member>,
    competition_seasons: BTreeSet<(LocalId, LocalId)>,
    team_competitions: BTreeSet<(LocalId, LocalId)>,
    member_teams: BTreeSet<(LocalId, LocalId)>,
    positions: Vec<LookupValue>,
    roles: Vec<LookupValue>,
    writes: usize,
}

impl State {
    fn allocate(&mut self) -> LocalId {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory entity store shared by every mock repository.
#[derive(Default, Clone)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the standard position and role lookups.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut state = store.state.lock().unwrap();
            for name in ["Goalkeeper", "Defender", "Midfielder", "Attacker"] {
                let id = state.allocate();
                state.positions.push(LookupValue { id, name: name.to_string() });
            }
            for name in ["PLAYER", "COACH", "ASSISTANT_COACH"] {
                let id = state.allocate();
                state.roles.push(LookupValue { id, name: name.to_string() });
            }
        }
        store
    }

    pub fn repositories(&self) -> SyncRepositories {
        SyncRepositories {
            areas: Arc::new(self.clone()),
            seasons: Arc::new(self.clone()),
            competitions: Arc::new(self.clone()),
            teams: Arc::new(self.clone()),
            members: Arc::new(self.clone()),
            lookups: Arc::new(self.clone()),
        }
    }

    pub fn areas(&self) -> Vec<Area> {
        self.state.lock().unwrap().areas.values().cloned().collect()
    }

    pub fn area(&self, src_id: SrcId) -> Option<Area> {
        self.state.lock().unwrap().areas.get(&src_id).cloned()
    }

    pub fn season(&self, src_id: SrcId) -> Option<Season> {
        self.state.lock().unwrap().seasons.get(&src_id).cloned()
    }

    pub fn seasons(&self) -> Vec<Season> {
        self.state.lock().unwrap().seasons.values().cloned().collect()
    }

    pub fn competition(&self, src_id: SrcId) -> Option<Competition> {
        self.state.lock().unwrap().competitions.get(&src_id).cloned()
    }

    pub fn team(&self, src_id: SrcId) -> Option<Team> {
        self.state.lock().unwrap().teams.get(&src_id).cloned()
    }

    pub fn member(&self, src_id: SrcId) -> Option<Member> {
        self.state.lock().unwrap().members.get(&src_id).cloned()
    }

    pub fn member_count(&self) -> usize {
        self.state.lock().unwrap().members.len()
    }

    /// Natural keys of the seasons linked to a competition.
    pub fn competition_season_keys(&self, competition: SrcId) -> Vec<SrcId> {
        let state = self.state.lock().unwrap();
        let Some(owner) = state.competitions.get(&competition) else {
            return Vec::new();
        };
        let linked: BTreeSet<LocalId> = state
            .competition_seasons
            .iter()
            .filter(|(c, _)| *c == owner.id)
            .map(|(_, s)| *s)
            .collect();
        state.seasons.values().filter(|s| linked.contains(&s.id)).map(|s| s.src_id).collect()
    }

    /// Natural keys of the competitions linked to a team.
    pub fn team_competition_keys(&self, team: SrcId) -> Vec<SrcId> {
        let state = self.state.lock().unwrap();
        let Some(owner) = state.teams.get(&team) else {
            return Vec::new();
        };
        let linked: BTreeSet<LocalId> = state
            .team_competitions
            .iter()
            .filter(|(t, _)| *t == owner.id)
            .map(|(_, c)| *c)
            .collect();
        state.competitions.values().filter(|c| linked.contains(&c.id)).map(|c| c.src_id).collect()
    }

    /// Natural keys of the teams a member belongs to.
    pub fn member_team_keys(&self, member: SrcId) -> Vec<SrcId> {
        let state = self.state.lock().unwrap();
        let Some(owner) = state.members.get(&member) else {
            return Vec::new();
        };
        let linked: BTreeSet<LocalId> = state
            .member_teams
            .iter()
            .filter(|(m, _)| *m == owner.id)
            .map(|(_, t)| *t)
            .collect();
        state.teams.values().filter(|t| linked.contains(&t.id)).map(|t| t.src_id).collect()
    }

    pub fn association_count(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.competition_seasons.len() + state.team_competitions.len() + state.member_teams.len()
    }

    /// Number of entity create/update calls seen so far.
    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    pub fn insert_area(&self, src_id: SrcId, name: &str, parent_src_id: Option<SrcId>) -> Area {
        let mut state = self.state.lock().unwrap();
        let parent_id = parent_src_id.and_then(|key| state.areas.get(&key)).map(|a| a.id);
        let id = state.allocate();
        let area = Area { id, src_id, name: name.to_string(), code: None, parent_id };
        state.areas.insert(src_id, area.clone());
        area
    }
}

#[async_trait]
impl AreaRepository for MemoryStore {
    async fn find_by_src_id(&self, src_id: SrcId) -> DomainResult<Option<Area>> {
        Ok(self.state.lock().unwrap().areas.get(&src_id).cloned())
    }

    async fn create(&self, area: &NewArea) -> DomainResult<Area> {
        let mut state = self.state.lock().unwrap();
        assert!(!state.areas.contains_key(&area.src_id), "duplicate area {}", area.src_id);
        let id = state.allocate();
        let stored = Area {
            id,
            src_id: area.src_id,
            name: area.name.clone(),
            code: area.code.clone(),
            parent_id: area.parent_id,
        };
        state.writes += 1;
        state.areas.insert(area.src_id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, area: &Area, fields: &AreaUpdate) -> DomainResult<Area> {
        let mut state = self.state.lock().unwrap();
        let stored = state.areas.get_mut(&area.src_id).expect("area exists");
        stored.name = fields.name.clone();
        stored.code = fields.code.clone();
        let updated = stored.clone();
        state.writes += 1;
        Ok(updated)
    }
}

#[async_trait]
impl SeasonRepository for MemoryStore {
    async fn find_by_src_id(&self, src_id: SrcId) -> DomainResult<Option<Season>> {
        Ok(self.state.lock().unwrap().seasons.get(&src_id).cloned())
    }

    async fn create(&self, fields: &SeasonFields) -> DomainResult<Season> {
        let mut state = self.state.lock().unwrap();
        assert!(!state.seasons.contains_key(&fields.src_id), "duplicate season {}", fields.src_id);
        let id = state.allocate();
        let season = Season {
            id,
            src_id: fields.src_id,
            start_date: fields.start_date,
            end_date: fields.end_date,
            current_match_day: fields.current_match_day,
        };
        state.writes += 1;
        state.seasons.insert(fields.src_id, season.clone());
        Ok(season)
    }

    async fn update(&self, season: &Season, fields: &SeasonFields) -> DomainResult<Season> {
        let mut state = self.state.lock().unwrap();
        let updated = Season {
            id: season.id,
            src_id: season.src_id,
            start_date: fields.start_date,
            end_date: fields.end_date,
            current_match_day: fields.current_match_day,
        };
        state.writes += 1;
        state.seasons.insert(season.src_id, updated.clone());
        Ok(updated)
    }
}

#[async_trait]
impl CompetitionRepository for MemoryStore {
    async fn find_by_src_id(&self, src_id: SrcId) -> DomainResult<Option<Competition>> {
        Ok(self.state.lock().unwrap().competitions.get(&src_id).cloned())
    }

    async fn create(&self, fields: &CompetitionFields) -> DomainResult<Competition> {
        let mut state = self.state.lock().unwrap();
        assert!(!state.competitions.contains_key(&fields.src_id));
        let id = state.allocate();
        let competition = competition_from(id, fields);
        state.writes += 1;
        state.competitions.insert(fields.src_id, competition.clone());
        Ok(competition)
    }

    async fn update(
        &self,
        competition: &Competition,
        fields: &CompetitionFields,
    ) -> DomainResult<Competition> {
        let mut state = self.state.lock().unwrap();
        let updated = competition_from(competition.id, fields);
        state.writes += 1;
        state.competitions.insert(competition.src_id, updated.clone());
        Ok(updated)
    }

    async fn add_seasons(&self, competition_id: LocalId, season_ids: &[LocalId]) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        for season_id in season_ids {
            state.competition_seasons.insert((competition_id, *season_id));
        }
        Ok(())
    }

    async fn season_ids(&self, competition_id: LocalId) -> DomainResult<Vec<LocalId>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .competition_seasons
            .iter()
            .filter(|(c, _)| *c == competition_id)
            .map(|(_, s)| *s)
            .collect())
    }
}

fn competition_from(id: LocalId, fields: &CompetitionFields) -> Competition {
    Competition {
        id,
        src_id: fields.src_id,
        name: fields.name.clone(),
        code: fields.code.clone(),
        area_id: fields.area_id,
        plan: fields.plan.clone(),
        current_season_id: fields.current_season_id,
    }
}

#[async_trait]
impl TeamRepository for MemoryStore {
    async fn find_by_src_id(&self, src_id: SrcId) -> DomainResult<Option<Team>> {
        Ok(self.state.lock().unwrap().teams.get(&src_id).cloned())
    }

    async fn create(&self, fields: &TeamFields) -> DomainResult<Team> {
        let mut state = self.state.lock().unwrap();
        assert!(!state.teams.contains_key(&fields.src_id));
        let id = state.allocate();
        let team = team_from(id, fields);
        state.writes += 1;
        state.teams.insert(fields.src_id, team.clone());
        Ok(team)
    }

    async fn update(&self, team: &Team, fields: &TeamFields) -> DomainResult<Team> {
        let mut state = self.state.lock().unwrap();
        let updated = team_from(team.id, fields);
        state.writes += 1;
        state.teams.insert(team.src_id, updated.clone());
        Ok(updated)
    }

    async fn add_competitions(
        &self,
        team_id: LocalId,
        competition_ids: &[LocalId],
    ) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        for competition_id in competition_ids {
            state.team_competitions.insert((team_id, *competition_id));
        }
        Ok(())
    }

    async fn competition_ids(&self, team_id: LocalId) -> DomainResult<Vec<LocalId>> {
        let state = self.state.lock().unwrap();
        Ok(state.team_competitions.iter().filter(|(t, _)| *t == team_id).map(|(_, c)| *c).collect())
    }
}

fn team_from(id: LocalId, fields: &TeamFields) -> Team {
    Team {
        id,
        src_id: fields.src_id,
        area_id: fields.area_id,
        name: fields.name.clone(),
        short_code: fields.short_code.clone(),
        address: fields.address.clone(),
        phone: fields.phone.clone(),
        website: fields.website.clone(),
        email: fields.email.clone(),
        founded: fields.founded,
        colors: fields.colors.clone(),
        venue: fields.venue.clone(),
    }
}

#[async_trait]
impl MemberRepository for MemoryStore {
    async fn find_by_src_id(&self, src_id: SrcId) -> DomainResult<Option<Member>> {
        Ok(self.state.lock().unwrap().members.get(&src_id).cloned())
    }

    async fn create(&self, fields: &MemberFields) -> DomainResult<Member> {
        let mut state = self.state.lock().unwrap();
        assert!(!state.members.contains_key(&fields.src_id));
        let id = state.allocate();
        let member = member_from(id, fields);
        state.writes += 1;
        state.members.insert(fields.src_id, member.clone());
        Ok(member)
    }

    async fn update(&self, member: &Member, fields: &MemberFields) -> DomainResult<Member> {
        let mut state = self.state.lock().unwrap();
        let updated = member_from(member.id, fields);
        state.writes += 1;
        state.members.insert(member.src_id, updated.clone());
        Ok(updated)
    }

    async fn add_teams(&self, member_id: LocalId, team_ids: &[LocalId]) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        for team_id in team_ids {
            state.member_teams.insert((member_id, *team_id));
        }
        Ok(())
    }

    async fn team_ids(&self, member_id: LocalId) -> DomainResult<Vec<LocalId>> {
        let state = self.state.lock().unwrap();
        Ok(state.member_teams.iter().filter(|(m, _)| *m == member_id).map(|(_, t)| *t).collect())
    }
}

fn member_from(id: LocalId, fields: &MemberFields) -> Member {
    Member {
        id,
        src_id: fields.src_id,
        name: fields.name.clone(),
        position_id: fields.position_id,
        date_of_birth: fields.date_of_birth,
        country_of_birth: fields.country_of_birth.clone(),
        nationality: fields.nationality.clone(),
        role_id: fields.role_id,
    }
}

#[async_trait]
impl LookupRepository for MemoryStore {
    async fn position_by_name(&self, name: &str) -> DomainResult<Option<LookupValue>> {
        let state = self.state.lock().unwrap();
        Ok(state.positions.iter().find(|p| p.name == name).cloned())
    }

    async fn role_by_name(&self, name: &str) -> DomainResult<Option<LookupValue>> {
        let state = self.state.lock().unwrap();
        Ok(state.roles.iter().find(|r| r.name == name).cloned())
    }
}
