//! Error types for the sync pipeline.

use thiserror::Error;

use solr_sync_repository::{SolrError, StoreError};
use solr_sync_shared::ResourceType;

/// Terminal outcomes of a failed sync pass.
///
/// Each variant maps to one caller-facing response class: `NotFound` to a
/// not-found response, `Store` to an internal error (detail logged, never
/// echoed to the caller), `Index` to a bad-gateway-class response, and
/// `Timeout` to a timeout-class response. Nothing here is fatal to the
/// process; a failed sync affects only its own request.
#[derive(Error, Debug)]
pub enum SyncError {
    /// No record with this id exists.
    #[error("{resource} record {id} not found")]
    NotFound {
        resource: ResourceType,
        id: i64,
    },

    /// The relational store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The Solr upsert failed, at the transport or engine layer.
    #[error("Index error: {0}")]
    Index(#[from] SolrError),

    /// The caller's deadline expired mid-pipeline.
    #[error("Sync of {resource} {id} timed out")]
    Timeout {
        resource: ResourceType,
        id: i64,
    },
}
