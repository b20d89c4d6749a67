//! Record store trait definition.

use async_trait::async_trait;

use crate::errors::StoreError;
use solr_sync_shared::{Record, ResourceType};

/// Abstract interface for reading authoritative records.
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
/// All operations are point lookups by primary key; absence of a matching
/// row is reported as `Ok(None)`, never as an error.
///
/// Every query is a plain future: dropping it (for example when the
/// caller's deadline expires) abandons the query.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the record for `(resource, id)`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(record))` - The record, with booleans normalized and
    ///   nullable text coalesced to empty strings
    /// * `Ok(None)` - No row with this id exists
    /// * `Err(StoreError)` - The query failed
    async fn get(&self, resource: ResourceType, id: i64) -> Result<Option<Record>, StoreError>;

    /// Write a synthetic description for `(resource, id)`, then fetch the
    /// refreshed record.
    ///
    /// The update stamps the row with a fixed message plus the current UTC
    /// time. If the update affects zero rows the record is absent and no
    /// re-read is performed. A successful update followed by a failed or
    /// empty re-read is a `StoreError`, never silent success.
    async fn get_and_touch(
        &self,
        resource: ResourceType,
        id: i64,
    ) -> Result<Option<Record>, StoreError>;
}
