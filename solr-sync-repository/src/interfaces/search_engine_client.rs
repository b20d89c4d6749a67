//! Search engine client trait definition.
//!
//! This module defines the abstract interface for the search engine's
//! update endpoint, allowing the concrete Solr client to be swapped for a
//! mock in tests.

use async_trait::async_trait;

use crate::errors::SolrError;
use solr_sync_shared::SolrDocument;

/// Abstract interface for single-document upserts into the search engine.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// No implementation retries internally; retry policy belongs to callers.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Upsert a single document into the named collection.
    ///
    /// The write must be committed before this returns: a subsequent read
    /// of the collection sees the document.
    ///
    /// # Arguments
    ///
    /// * `collection` - The Solr collection to write to
    /// * `document` - The document to upsert, idempotent at the `id` field
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The document is indexed and committed
    /// * `Err(SolrError)` - Transport failure, non-2xx response, or a
    ///   non-zero embedded `responseHeader.status`
    async fn upsert(&self, collection: &str, document: &SolrDocument) -> Result<(), SolrError>;

    /// Check if the search engine is reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The engine answered the status request
    /// * `Ok(false)` - The engine answered with a failure status
    /// * `Err(SolrError)` - The check itself could not be executed
    async fn health_check(&self) -> Result<bool, SolrError>;
}
