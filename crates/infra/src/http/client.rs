//! Authenticated transport to the football data source.
//!
//! One [`HttpClient::get`] is one request as far as the caller is concerned:
//! connection failures, timeouts and 5xx answers are retried within the
//! configured attempt budget, with the delay doubling per retry. Every other
//! status (including 429 and 403) is handed back to the fetcher untouched.

use std::sync::Arc;
use std::time::Duration;

use pitchsync_domain::constants::AUTH_TOKEN_HEADER;
use pitchsync_domain::{PitchSyncError, Result, SourceConfig};
use reqwest::{Client, Response};
use tracing::{debug, warn};

use super::backoff::{Sleeper, TokioSleeper};
use crate::errors::InfraError;

const USER_AGENT: &str = concat!("pitchsync/", env!("CARGO_PKG_VERSION"));

/// Doublings applied to the base delay before it stops growing.
const MAX_BACKOFF_DOUBLINGS: u32 = 8;

/// GET-only client carrying the source credential and the transport retry
/// budget.
#[derive(Clone)]
pub struct HttpClient {
    inner: Client,
    auth_token: String,
    attempts: u32,
    base_backoff: Duration,
    sleeper: Arc<dyn Sleeper>,
}

impl HttpClient {
    /// Build a client from the source configuration. The credential is
    /// mandatory.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let auth_token = config
            .auth_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| PitchSyncError::Config("source API token is not configured".into()))?;

        let inner = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()
            .map_err(|err| PitchSyncError::from(InfraError::from(err)))?;

        Ok(Self {
            inner,
            auth_token: auth_token.to_string(),
            attempts: config.transport_attempts.max(1),
            base_backoff: Duration::from_millis(config.transport_backoff_ms),
            sleeper: Arc::new(TokioSleeper),
        })
    }

    /// Replace the sleeper used between transport retries.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Authenticated GET of `url`.
    ///
    /// # Errors
    /// `Network` when the connection keeps failing past the attempt budget;
    /// a 5xx answer on the last attempt is returned as a response.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let mut attempt = 1;

        loop {
            debug!(url, attempt, "sending source request");
            let outcome =
                self.inner.get(url).header(AUTH_TOKEN_HEADER, &self.auth_token).send().await;
            let exhausted = attempt >= self.attempts;

            match outcome {
                Ok(response) if response.status().is_server_error() && !exhausted => {
                    warn!(url, attempt, status = %response.status(), "source unavailable; retrying");
                }
                Ok(response) => return Ok(response),
                Err(err) if is_transient(&err) && !exhausted => {
                    warn!(url, attempt, error = %err, "source request failed; retrying");
                }
                Err(err) => return Err(InfraError::from(err).into()),
            }

            self.sleeper.sleep(self.backoff_delay(attempt)).await;
            attempt += 1;
        }
    }

    /// Delay after failed attempt `attempt` (1-based): `base * 2^(attempt-1)`.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let doublings = attempt.saturating_sub(1).min(MAX_BACKOFF_DOUBLINGS);
        self.base_backoff.saturating_mul(1 << doublings)
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}
