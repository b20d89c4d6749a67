//! Sync orchestrator.
//!
//! Coordinates the record store, mapper and search engine client for a
//! single request: fetch, map, upsert. Terminal after one pass, no state
//! retained between requests, no retries.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info, instrument, warn};

use crate::errors::SyncError;
use crate::mapper;
use solr_sync_repository::{RecordStore, SearchEngineClient};
use solr_sync_shared::{ResourceType, SyncReceipt};

/// Default per-request deadline for the full pipeline.
const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

/// Orchestrator for the fetch-map-upsert pipeline.
///
/// Holds handles to the long-lived store and search client, which are
/// constructed by the composition root and safe for concurrent use. Each
/// call runs independently; two concurrent syncs of the same id may race at
/// the index, last commit wins.
pub struct SyncOrchestrator {
    store: Arc<dyn RecordStore>,
    search: Arc<dyn SearchEngineClient>,
    deadline: Duration,
}

impl SyncOrchestrator {
    /// Create a new orchestrator with the default deadline.
    pub fn new(store: Arc<dyn RecordStore>, search: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            store,
            search,
            deadline: DEFAULT_DEADLINE,
        }
    }

    /// Create a new orchestrator with a custom per-request deadline.
    pub fn with_deadline(
        store: Arc<dyn RecordStore>,
        search: Arc<dyn SearchEngineClient>,
        deadline: Duration,
    ) -> Self {
        Self {
            store,
            search,
            deadline,
        }
    }

    /// Sync one record into Solr.
    ///
    /// Fetches the record, maps it to a document and upserts it into the
    /// resource's collection. If the deadline expires mid-pipeline the
    /// remaining steps are abandoned rather than completing an orphaned
    /// write.
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReceipt)` - The document is indexed and committed
    /// * `Err(SyncError)` - The classified terminal failure
    #[instrument(skip(self))]
    pub async fn sync(&self, resource: ResourceType, id: i64) -> Result<SyncReceipt, SyncError> {
        match timeout(self.deadline, self.run(resource, id, false)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(resource = %resource, id = id, "Sync deadline expired");
                Err(SyncError::Timeout { resource, id })
            }
        }
    }

    /// Touch one record (write a synthetic description), then sync it.
    ///
    /// Same pipeline as [`sync`](Self::sync), but the fetch goes through the
    /// side-effecting `get_and_touch` store variant.
    #[instrument(skip(self))]
    pub async fn touch_and_sync(
        &self,
        resource: ResourceType,
        id: i64,
    ) -> Result<SyncReceipt, SyncError> {
        match timeout(self.deadline, self.run(resource, id, true)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(resource = %resource, id = id, "Sync deadline expired");
                Err(SyncError::Timeout { resource, id })
            }
        }
    }

    async fn run(
        &self,
        resource: ResourceType,
        id: i64,
        touch: bool,
    ) -> Result<SyncReceipt, SyncError> {
        let fetched = if touch {
            self.store.get_and_touch(resource, id).await
        } else {
            self.store.get(resource, id).await
        };

        let record = match fetched {
            Ok(Some(record)) => record,
            Ok(None) => {
                info!(resource = %resource, id = id, "Record not found");
                return Err(SyncError::NotFound { resource, id });
            }
            Err(e) => {
                // Logged here with detail; the boundary layer reports only a
                // generic message to the caller.
                error!(resource = %resource, id = id, error = %e, "Record fetch failed");
                return Err(SyncError::Store(e));
            }
        };

        let document = mapper::to_document(&record);

        if let Err(e) = self.search.upsert(resource.collection(), &document).await {
            error!(
                resource = %resource,
                id = id,
                collection = %resource.collection(),
                error = %e,
                "Solr upsert failed"
            );
            return Err(SyncError::Index(e));
        }

        info!(resource = %resource, id = id, "Record synced");
        Ok(SyncReceipt::new(resource, id))
    }
}
