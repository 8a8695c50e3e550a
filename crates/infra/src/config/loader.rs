//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `PITCHSYNC_DB_PATH`: Database file path (required)
//! - `PITCHSYNC_DB_POOL_SIZE`: Connection pool size
//! - `PITCHSYNC_API_TOKEN`: Source credential (required; `FOOTBALL_API_KEY`
//!   is accepted as a fallback)
//! - `PITCHSYNC_API_BASE_URL`: Source base URL
//! - `PITCHSYNC_HTTP_TIMEOUT`: Request timeout in seconds
//! - `PITCHSYNC_HTTP_ATTEMPTS`: Attempts per request on connection failures
//!   and 5xx responses
//! - `PITCHSYNC_MAX_RATE_LIMIT_WAITS`: Rate-limit waits allowed per request
//! - `PITCHSYNC_COMPETITION_ID`: Competition seeded by a full run
//! - `PITCHSYNC_ORPHAN_POLICY`: `fail` or `attach_to_root`
//! - `PITCHSYNC_SKIP_INVALID_MEMBERS`: Skip members with unknown roles
//!   (true/false)
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./pitchsync.json` or `./pitchsync.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pitchsync_domain::{
    Config, DatabaseConfig, OrphanPolicy, PitchSyncError, Result, SourceConfig, SyncConfig,
};

const TOKEN_VARS: &[&str] = &["PITCHSYNC_API_TOKEN", "FOOTBALL_API_KEY"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file. A
/// credential present in the environment is applied to a file-based config
/// that lacks one.
///
/// # Errors
/// Returns `PitchSyncError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_with_env_token(None)
        }
    }
}

/// Load configuration from an explicit file, or with the default strategy
/// when `path` is `None`.
///
/// # Errors
/// Returns `PitchSyncError::Config` if the file is missing or invalid.
pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => load_with_env_token(Some(path)),
        None => load(),
    }
}

/// File-based config with the credential filled from the environment when
/// the file carries none.
fn load_with_env_token(path: Option<PathBuf>) -> Result<Config> {
    let mut config = load_from_file(path)?;
    if config.source.auth_token.is_none() {
        config.source.auth_token = api_token();
    }
    Ok(config)
}

/// Load configuration from environment variables
///
/// `PITCHSYNC_DB_PATH` and the API token are required; everything else falls
/// back to its default.
///
/// # Errors
/// Returns `PitchSyncError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("PITCHSYNC_DB_PATH")?;
    let auth_token = api_token().ok_or_else(|| {
        PitchSyncError::Config(format!(
            "Missing required environment variable: one of {}",
            TOKEN_VARS.join(", ")
        ))
    })?;

    let defaults = Config::default();

    let database = DatabaseConfig {
        path: db_path,
        pool_size: env_parse("PITCHSYNC_DB_POOL_SIZE", defaults.database.pool_size)?,
    };

    let source = SourceConfig {
        base_url: std::env::var("PITCHSYNC_API_BASE_URL")
            .unwrap_or_else(|_| defaults.source.base_url.clone()),
        auth_token: Some(auth_token),
        timeout_seconds: env_parse("PITCHSYNC_HTTP_TIMEOUT", defaults.source.timeout_seconds)?,
        max_rate_limit_waits: env_parse(
            "PITCHSYNC_MAX_RATE_LIMIT_WAITS",
            defaults.source.max_rate_limit_waits,
        )?,
        default_rate_limit_wait_seconds: defaults.source.default_rate_limit_wait_seconds,
        transport_attempts: env_parse(
            "PITCHSYNC_HTTP_ATTEMPTS",
            defaults.source.transport_attempts,
        )?,
        transport_backoff_ms: defaults.source.transport_backoff_ms,
    };

    let sync = SyncConfig {
        competition_id: env_parse("PITCHSYNC_COMPETITION_ID", defaults.sync.competition_id)?,
        root_area_id: defaults.sync.root_area_id,
        orphan_policy: env_parse::<OrphanPolicy>("PITCHSYNC_ORPHAN_POLICY", OrphanPolicy::Fail)?,
        skip_invalid_members: env_bool("PITCHSYNC_SKIP_INVALID_MEMBERS", false),
    };

    Ok(Config { database, source, sync })
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the usual locations for a config file.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `PitchSyncError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PitchSyncError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => discover_config_path().ok_or_else(|| {
            PitchSyncError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PitchSyncError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PitchSyncError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PitchSyncError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(PitchSyncError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn discover_config_path() -> Option<PathBuf> {
    const NAMES: &[&str] = &["config.json", "config.toml", "pitchsync.json", "pitchsync.toml"];

    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// First non-empty credential among the accepted variables.
fn api_token() -> Option<String> {
    TOKEN_VARS
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        PitchSyncError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional environment variable, falling back to `default` when
/// unset.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| PitchSyncError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
