//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_COMPETITION_ID, DEFAULT_DB_PATH, DEFAULT_DB_POOL_SIZE,
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_MAX_RATE_LIMIT_WAITS, DEFAULT_RATE_LIMIT_WAIT_SECS,
    DEFAULT_TRANSPORT_ATTEMPTS, DEFAULT_TRANSPORT_BACKOFF_MS, WORLD_AREA_SRC_ID,
};
use crate::impl_domain_status_conversions;
use crate::types::SrcId;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

/// Remote data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default, skip_serializing)]
    pub auth_token: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Hard ceiling on consecutive rate-limit waits for a single request.
    #[serde(default = "default_max_rate_limit_waits")]
    pub max_rate_limit_waits: u32,
    /// Wait used when a rate-limit response carries no usable duration.
    #[serde(default = "default_rate_limit_wait")]
    pub default_rate_limit_wait_seconds: u64,
    /// Attempts per request (first try included) when the connection fails
    /// or the source answers 5xx.
    #[serde(default = "default_transport_attempts")]
    pub transport_attempts: u32,
    /// Delay before the first transport retry; doubles on each further retry.
    #[serde(default = "default_transport_backoff")]
    pub transport_backoff_ms: u64,
}

/// Synchronization behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Competition seeded by a full run.
    #[serde(default = "default_competition_id")]
    pub competition_id: SrcId,
    /// Natural key of the synthetic root area.
    #[serde(default = "default_root_area_id")]
    pub root_area_id: SrcId,
    #[serde(default)]
    pub orphan_policy: OrphanPolicy,
    /// Skip (and report) members whose role cannot be resolved instead of
    /// failing the enclosing team.
    #[serde(default)]
    pub skip_invalid_members: bool,
}

/// What to do with an area whose declared parent is absent from the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanPolicy {
    /// Abort area synchronization with `OrphanedArea`.
    #[default]
    Fail,
    /// Create the area directly under the synthetic root.
    AttachToRoot,
}

impl_domain_status_conversions!(OrphanPolicy {
    Fail => "fail",
    AttachToRoot => "attach_to_root",
});

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: DEFAULT_DB_PATH.to_string(), pool_size: DEFAULT_DB_POOL_SIZE }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_token: None,
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
            max_rate_limit_waits: DEFAULT_MAX_RATE_LIMIT_WAITS,
            default_rate_limit_wait_seconds: DEFAULT_RATE_LIMIT_WAIT_SECS,
            transport_attempts: DEFAULT_TRANSPORT_ATTEMPTS,
            transport_backoff_ms: DEFAULT_TRANSPORT_BACKOFF_MS,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            competition_id: DEFAULT_COMPETITION_ID,
            root_area_id: WORLD_AREA_SRC_ID,
            orphan_policy: OrphanPolicy::default(),
            skip_invalid_members: false,
        }
    }
}

fn default_pool_size() -> u32 {
    DEFAULT_DB_POOL_SIZE
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_max_rate_limit_waits() -> u32 {
    DEFAULT_MAX_RATE_LIMIT_WAITS
}

fn default_rate_limit_wait() -> u64 {
    DEFAULT_RATE_LIMIT_WAIT_SECS
}

fn default_transport_attempts() -> u32 {
    DEFAULT_TRANSPORT_ATTEMPTS
}

fn default_transport_backoff() -> u64 {
    DEFAULT_TRANSPORT_BACKOFF_MS
}

fn default_competition_id() -> SrcId {
    DEFAULT_COMPETITION_ID
}

fn default_root_area_id() -> SrcId {
    WORLD_AREA_SRC_ID
}
