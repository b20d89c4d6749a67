//! Sync receipt returned for a successful pipeline pass.

use serde::Serialize;

use crate::resource::ResourceType;

/// Confirmation that a record was fetched, mapped and upserted into Solr.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncReceipt {
    /// The resource type that was synced.
    pub resource: ResourceType,
    /// The numeric record id.
    pub id: i64,
    /// Human-readable confirmation message.
    pub message: String,
}

impl SyncReceipt {
    /// Build the receipt for a completed sync.
    pub fn new(resource: ResourceType, id: i64) -> Self {
        Self {
            resource,
            id,
            message: format!("{} {} updated and synced to Solr", resource.display_name(), id),
        }
    }
}
