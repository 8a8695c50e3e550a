#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use pitchsync_domain::SourceConfig;
use pitchsync_infra::database::DbManager;
use pitchsync_infra::http::{HttpFetcher, Sleeper};
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "test-token";

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with the schema applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("pitchsync-test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("schema migrations should apply");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    /// Execute a batch of SQL statements against the database.
    pub fn execute_batch(&self, sql: &str) {
        let conn = self
            .manager
            .get_connection()
            .expect("connection should be available for execute_batch");
        conn.execute_batch(sql).expect("SQL batch execution should succeed");
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// Sleeper that records requested waits instead of sleeping.
#[derive(Default)]
pub struct RecordingSleeper {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().expect("sleeper mutex poisoned").clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.waits.lock().expect("sleeper mutex poisoned").push(duration);
    }
}

/// Source configuration pointing at a mock server.
pub fn source_config(base_url: &str) -> SourceConfig {
    SourceConfig {
        base_url: base_url.to_string(),
        auth_token: Some(TEST_TOKEN.to_string()),
        timeout_seconds: 5,
        max_rate_limit_waits: 3,
        default_rate_limit_wait_seconds: 60,
        transport_attempts: 1,
        transport_backoff_ms: 50,
    }
}

/// Fetcher built from `config` whose rate-limit waits and transport
/// backoffs land in the returned sleeper.
pub fn recording_fetcher(config: &SourceConfig) -> (HttpFetcher, Arc<RecordingSleeper>) {
    let sleeper = Arc::new(RecordingSleeper::default());
    let fetcher = HttpFetcher::from_config(config)
        .expect("fetcher should build")
        .with_sleeper(Arc::clone(&sleeper) as Arc<dyn Sleeper>);
    (fetcher, sleeper)
}

/// Route engine logs to the test harness output once per binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("pitchsync_core=debug,pitchsync_infra=debug"))
            .with_test_writer()
            .try_init();
    });
}
