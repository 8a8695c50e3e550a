//! `Fetcher` implementation for the football data source.
//!
//! One `fetch` is one logical retrieval: the request is re-sent after every
//! rate-limit response until it succeeds, fails for another reason, or the
//! configured number of waits is used up.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use pitchsync_core::Fetcher;
use pitchsync_domain::{PitchSyncError, Result, SourceConfig};
use regex::Regex;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use super::backoff::{Sleeper, TokioSleeper};
use super::client::HttpClient;
use crate::errors::InfraError;

/// Rate-limit aware JSON fetcher over the authenticated [`HttpClient`].
pub struct HttpFetcher {
    client: HttpClient,
    sleeper: Arc<dyn Sleeper>,
    max_rate_limit_waits: u32,
    default_wait: Duration,
}

impl HttpFetcher {
    fn new(client: HttpClient, config: &SourceConfig) -> Self {
        Self {
            client,
            sleeper: Arc::new(TokioSleeper),
            max_rate_limit_waits: config.max_rate_limit_waits,
            default_wait: Duration::from_secs(config.default_rate_limit_wait_seconds),
        }
    }

    /// Build a fetcher from the source configuration. The credential is
    /// mandatory.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Ok(Self::new(HttpClient::from_config(config)?, config))
    }

    /// Replace the sleeper used for rate-limit waits and transport retries.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.client = self.client.with_sleeper(Arc::clone(&sleeper));
        self.sleeper = sleeper;
        self
    }

    async fn rate_limit_wait(&self, response: reqwest::Response) -> Duration {
        let header_wait = retry_after(response.headers());
        let body = response.text().await.unwrap_or_default();
        wait_from_message(&body).or(header_wait).unwrap_or(self.default_wait)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Value> {
        let mut waits = 0u32;

        loop {
            let response = self.client.get(url).await?;
            let status = response.status();

            match status {
                StatusCode::TOO_MANY_REQUESTS => {
                    if waits >= self.max_rate_limit_waits {
                        return Err(PitchSyncError::RateLimitExceeded(format!(
                            "{url} still rate limited after {waits} waits"
                        )));
                    }
                    let wait = self.rate_limit_wait(response).await;
                    waits += 1;
                    warn!(url, wait_secs = wait.as_secs(), attempt = waits, "rate limited; waiting");
                    self.sleeper.sleep(wait).await;
                }
                StatusCode::FORBIDDEN => {
                    let detail = error_message(response).await;
                    return Err(PitchSyncError::PermissionDenied(format!("{url}: {detail}")));
                }
                StatusCode::UNAUTHORIZED => {
                    let detail = error_message(response).await;
                    return Err(PitchSyncError::Auth(format!("{url}: {detail}")));
                }
                status if !status.is_success() => {
                    let detail = error_message(response).await;
                    return Err(PitchSyncError::Source(format!("{url} returned {status}: {detail}")));
                }
                _ => {
                    debug!(url, %status, "source resource retrieved");
                    let body = response.bytes().await.map_err(InfraError::from)?;
                    let document: Value =
                        serde_json::from_slice(&body).map_err(InfraError::from)?;
                    return Ok(document);
                }
            }
        }
    }
}

fn wait_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+").ok()).as_ref()
}

/// Wait advertised by the first integer in the JSON body's `message`.
fn wait_from_message(body: &str) -> Option<Duration> {
    let document: Value = serde_json::from_str(body).ok()?;
    let message = document.get("message")?.as_str()?;
    let digits = wait_pattern()?.find(message)?;
    digits.as_str().parse::<u64>().ok().map(Duration::from_secs)
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Best-effort human readable detail from an error response.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|document| document.get("message")?.as_str().map(str::to_owned))
        .unwrap_or_else(|| status.to_string())
}
