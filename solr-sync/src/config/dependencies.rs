//! Dependency initialization and wiring for the sync service.

use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::ServiceError;
use solr_sync_pipeline::SyncOrchestrator;
use solr_sync_repository::{
    MySqlRecordStore, SearchEngineClient, SolrClient, StoreConfig,
};

/// Default HTTP server port.
const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default Solr base URL.
const DEFAULT_SOLR_BASE_URL: &str = "http://localhost:8983/solr";

/// Default per-request sync deadline in seconds.
const DEFAULT_SYNC_TIMEOUT_SECS: u64 = 30;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator, shared across request tasks.
    pub orchestrator: Arc<SyncOrchestrator>,
    /// The MySQL store, retained for shutdown.
    pub store: Arc<MySqlRecordStore>,
    /// Port the HTTP server binds to.
    pub port: u16,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SERVER_PORT`: HTTP server port (default: 8080)
    /// - `MYSQL_HOST`: MySQL host (default: localhost)
    /// - `MYSQL_PORT`: MySQL port (default: 3306)
    /// - `MYSQL_USER`: MySQL user (default: root)
    /// - `MYSQL_PASSWORD`: MySQL password (default: empty)
    /// - `MYSQL_DATABASE`: MySQL database (default: solr_sync)
    /// - `SOLR_BASE_URL`: Solr base URL (default: http://localhost:8983/solr)
    /// - `SYNC_TIMEOUT_SECS`: per-request pipeline deadline (default: 30)
    ///
    /// A failed MySQL connection is fatal. A failed Solr health check only
    /// logs a warning; the engine may come up later and every sync is
    /// classified per request anyway.
    pub async fn new() -> Result<Self, ServiceError> {
        let port = env_parsed("SERVER_PORT", DEFAULT_SERVER_PORT)?;
        let solr_base_url =
            env::var("SOLR_BASE_URL").unwrap_or_else(|_| DEFAULT_SOLR_BASE_URL.to_string());
        let timeout_secs = env_parsed("SYNC_TIMEOUT_SECS", DEFAULT_SYNC_TIMEOUT_SECS)?;

        let store_config = store_config_from_env()?;

        info!(
            port = port,
            mysql_host = %store_config.host,
            mysql_database = %store_config.database,
            solr_base_url = %solr_base_url,
            timeout_secs = timeout_secs,
            "Initializing dependencies"
        );

        let store = Arc::new(MySqlRecordStore::connect(&store_config).await?);
        info!("MySQL connection established");

        let solr = Arc::new(SolrClient::new(&solr_base_url)?);
        match solr.health_check().await {
            Ok(true) => info!("Solr connection verified"),
            Ok(false) => warn!("Solr answered the status request with a failure"),
            Err(e) => warn!(error = %e, "Solr health check failed"),
        }

        let orchestrator = Arc::new(SyncOrchestrator::with_deadline(
            store.clone(),
            solr,
            Duration::from_secs(timeout_secs),
        ));

        Ok(Self {
            orchestrator,
            store,
            port,
        })
    }
}

fn store_config_from_env() -> Result<StoreConfig, ServiceError> {
    let defaults = StoreConfig::default();
    Ok(StoreConfig {
        host: env::var("MYSQL_HOST").unwrap_or(defaults.host),
        port: env_parsed("MYSQL_PORT", defaults.port)?,
        user: env::var("MYSQL_USER").unwrap_or(defaults.user),
        password: env::var("MYSQL_PASSWORD").unwrap_or(defaults.password),
        database: env::var("MYSQL_DATABASE").unwrap_or(defaults.database),
    })
}

/// Read an env var and parse it, falling back to `default` when unset.
/// A set-but-malformed value is a configuration error, not a silent default.
fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ServiceError> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|_| ServiceError::config(format!("{} is not a valid value for {}", value, key))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_parsed_default_when_unset() {
        let value: u16 = env_parsed("SOLR_SYNC_TEST_UNSET_VAR", 8080).unwrap();
        assert_eq!(value, 8080);
    }
}
