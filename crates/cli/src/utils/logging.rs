//! Tracing setup and structured command logging.
//!
//! Every command ends with one `command_execution_*` event carrying its
//! duration and, on failure, a stable error label.

use std::time::Duration;

use pitchsync_domain::PitchSyncError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "pitchsync_cli=info,pitchsync_core=info,pitchsync_infra=info";
const VERBOSE_FILTER: &str = "pitchsync_cli=debug,pitchsync_core=debug,pitchsync_infra=debug";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the built-in filters. Logs go to stderr
/// so command output on stdout stays machine readable.
pub fn init_logging(json: bool, verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let result = if json { builder.json().try_init() } else { builder.try_init() };
    if let Err(err) = result {
        eprintln!("logging already initialised: {err}");
    }
}

/// Log the outcome of a command execution with structured fields.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&PitchSyncError>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => {
            warn!(command, duration_ms, error_type = error_label(err), "command_execution_failure")
        }
    }
}

/// Convert a `PitchSyncError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &PitchSyncError) -> &'static str {
    match error {
        PitchSyncError::Database(_) => "database",
        PitchSyncError::Config(_) => "config",
        PitchSyncError::Network(_) => "network",
        PitchSyncError::Auth(_) => "auth",
        PitchSyncError::PermissionDenied(_) => "permission_denied",
        PitchSyncError::RateLimitExceeded(_) => "rate_limit_exceeded",
        PitchSyncError::Source(_) => "source",
        PitchSyncError::NotFound(_) => "not_found",
        PitchSyncError::MissingLookup { .. } => "missing_lookup",
        PitchSyncError::OrphanedArea { .. } => "orphaned_area",
        PitchSyncError::AreaCycle { .. } => "area_cycle",
        PitchSyncError::Internal(_) => "internal",
    }
}
