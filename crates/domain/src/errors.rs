//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::SrcId;

/// Main error type for PitchSync
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PitchSyncError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    /// The source refused access to a resource (HTTP 403). Never retried.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The source kept rate limiting past the configured ceiling.
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Unexpected status or undecodable payload from the source.
    #[error("Source error: {0}")]
    Source(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A mandatory lookup value (e.g. a member role) does not exist.
    #[error("Missing {kind} lookup value: {name}")]
    MissingLookup { kind: String, name: String },

    #[error("Area {src_id} declares parent {parent_src_id}, which is not in the area listing")]
    OrphanedArea { src_id: SrcId, parent_src_id: SrcId },

    #[error("Area {src_id} is part of a parent cycle")]
    AreaCycle { src_id: SrcId },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PitchSyncError {
    /// Whether this error is the skippable permission failure raised by the
    /// fetcher on a forbidden resource.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }

    /// Whether this error is a missing mandatory lookup value.
    pub fn is_missing_lookup(&self) -> bool {
        matches!(self, Self::MissingLookup { .. })
    }
}

/// Result type alias for PitchSync operations
pub type Result<T> = std::result::Result<T, PitchSyncError>;
