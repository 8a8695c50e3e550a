//! # PitchSync Core
//!
//! Pure synchronization logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the remote source and the local store
//! - The synchronization engine: area tree resolution and the season,
//!   competition, team and member synchronizers
//! - Per-run caching and reporting
//!
//! ## Architecture Principles
//! - Only depends on `pitchsync-domain`
//! - No database or HTTP code
//! - All external dependencies via traits
//! - Strictly sequential: one retrieval and one upsert at a time

pub mod sync;
pub mod utils;

pub use sync::endpoints::SourceEndpoints;
pub use sync::ports::{
    AreaRepository, CompetitionRepository, Fetcher, LookupRepository, MemberRepository,
    SeasonRepository, SyncRepositories, TeamRepository,
};
pub use sync::run::{SyncReport, SyncRun, UpsertCounts};
pub use sync::service::{SyncEngine, SyncOptions};
