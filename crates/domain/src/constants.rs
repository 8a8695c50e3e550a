//! Application constants
//!
//! Centralized location for the domain-level constants shared by the engine,
//! the fetcher and the store.

use crate::types::SrcId;

// Synthetic root area
pub const WORLD_AREA_SRC_ID: SrcId = 2267;
pub const WORLD_AREA_NAME: &str = "World";
pub const WORLD_AREA_CODE: &str = "INT";

// Remote data source
pub const DEFAULT_API_BASE_URL: &str = "http://api.football-data.org/v2";
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
pub const DEFAULT_COMPETITION_ID: SrcId = 2021; // Premier League
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RATE_LIMIT_WAIT_SECS: u64 = 60;
pub const DEFAULT_MAX_RATE_LIMIT_WAITS: u32 = 32;
pub const DEFAULT_TRANSPORT_ATTEMPTS: u32 = 3;
pub const DEFAULT_TRANSPORT_BACKOFF_MS: u64 = 250;

// Payload formats
pub const SEASON_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// Local store
pub const DEFAULT_DB_PATH: &str = "pitchsync.db";
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;

// Lookup tables seeded outside the engine
pub const DEFAULT_POSITIONS: &[&str] = &["Goalkeeper", "Defender", "Midfielder", "Attacker"];
pub const DEFAULT_ROLES: &[&str] = &["PLAYER", "COACH", "ASSISTANT_COACH", "STAFF"];
