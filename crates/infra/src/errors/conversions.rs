//! Conversions from external infrastructure errors into domain errors.

use pitchsync_domain::PitchSyncError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PitchSyncError);

impl From<InfraError> for PitchSyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PitchSyncError> for InfraError {
    fn from(value: PitchSyncError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPitchSyncError {
    fn into_pitchsync(self) -> PitchSyncError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → PitchSyncError */
/* -------------------------------------------------------------------------- */

impl IntoPitchSyncError for SqlError {
    fn into_pitchsync(self) -> PitchSyncError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        PitchSyncError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        PitchSyncError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        PitchSyncError::Database(format!("unique constraint violation: {message}"))
                    }
                    (ErrorCode::ConstraintViolation, 787) => {
                        PitchSyncError::Database("foreign key constraint violation".into())
                    }
                    _ => PitchSyncError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => PitchSyncError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                PitchSyncError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                PitchSyncError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => PitchSyncError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => PitchSyncError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_pitchsync())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → PitchSyncError */
/* -------------------------------------------------------------------------- */

impl IntoPitchSyncError for r2d2::Error {
    fn into_pitchsync(self) -> PitchSyncError {
        PitchSyncError::Database(format!("connection pool error: {self}"))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(value.into_pitchsync())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → PitchSyncError */
/* -------------------------------------------------------------------------- */

impl IntoPitchSyncError for serde_json::Error {
    fn into_pitchsync(self) -> PitchSyncError {
        PitchSyncError::Source(format!("invalid JSON document: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_pitchsync())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PitchSyncError */
/* -------------------------------------------------------------------------- */

impl IntoPitchSyncError for HttpError {
    fn into_pitchsync(self) -> PitchSyncError {
        if self.is_timeout() {
            return PitchSyncError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return PitchSyncError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return PitchSyncError::Source(format!("undecodable response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 => PitchSyncError::Auth(message),
                403 => PitchSyncError::PermissionDenied(message),
                404 => PitchSyncError::NotFound(message),
                429 => PitchSyncError::RateLimitExceeded(message),
                _ => PitchSyncError::Source(message),
            };
        }

        PitchSyncError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_pitchsync())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
