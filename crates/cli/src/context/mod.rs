//! Application context - dependency injection container

use std::path::PathBuf;
use std::sync::Arc;

use pitchsync_core::{SourceEndpoints, SyncEngine, SyncOptions};
use pitchsync_domain::{Config, Result};
use pitchsync_infra::config;
use pitchsync_infra::{
    sync_repositories, DbManager, HttpFetcher, SqliteLookupRepository, SqliteStatsRepository,
};
use tracing::{debug, info};

/// Holds the loaded configuration and the shared database handle. The
/// source-facing engine is built on demand so store-only commands run
/// without a credential.
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub lookups: SqliteLookupRepository,
    pub stats: SqliteStatsRepository,
}

impl AppContext {
    /// Load configuration (explicit file or the default strategy) and open
    /// the store.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let config = config::load_from(config_path)?;
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::from_config(&config.database)?);
        info!(path = %db.path().display(), "store opened");

        Ok(Self {
            lookups: SqliteLookupRepository::new(Arc::clone(&db)),
            stats: SqliteStatsRepository::new(Arc::clone(&db)),
            config,
            db,
        })
    }

    /// Apply the schema. Idempotent; lookups are seeded separately.
    pub fn prepare_store(&self) -> Result<()> {
        self.db.run_migrations()?;
        debug!("store schema ready");
        Ok(())
    }

    /// Engine wired to the configured source and this context's store.
    pub fn engine(&self) -> Result<SyncEngine> {
        let fetcher = HttpFetcher::from_config(&self.config.source)?;
        Ok(SyncEngine::new(
            Arc::new(fetcher),
            sync_repositories(&self.db),
            SourceEndpoints::new(self.config.source.base_url.clone()),
        )
        .with_options(SyncOptions::from(&self.config.sync)))
    }
}
