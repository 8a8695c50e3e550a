//! SQLite-backed entity store

pub mod area_repository;
pub mod competition_repository;
pub mod lookup_repository;
pub mod manager;
pub mod member_repository;
pub mod repository;
pub mod season_repository;
pub mod stats_repository;
pub mod team_repository;

use std::sync::Arc;

use pitchsync_core::SyncRepositories;

pub use area_repository::SqliteAreaRepository;
pub use competition_repository::SqliteCompetitionRepository;
pub use lookup_repository::SqliteLookupRepository;
pub use manager::{DbManager, SqliteConnection, SqlitePool};
pub use member_repository::SqliteMemberRepository;
pub use season_repository::SqliteSeasonRepository;
pub use stats_repository::SqliteStatsRepository;
pub use team_repository::SqliteTeamRepository;

/// Wire every engine-facing repository to the same database.
pub fn sync_repositories(db: &Arc<DbManager>) -> SyncRepositories {
    SyncRepositories {
        areas: Arc::new(SqliteAreaRepository::new(Arc::clone(db))),
        seasons: Arc::new(SqliteSeasonRepository::new(Arc::clone(db))),
        competitions: Arc::new(SqliteCompetitionRepository::new(Arc::clone(db))),
        teams: Arc::new(SqliteTeamRepository::new(Arc::clone(db))),
        members: Arc::new(SqliteMemberRepository::new(Arc::clone(db))),
        lookups: Arc::new(SqliteLookupRepository::new(Arc::clone(db))),
    }
}
