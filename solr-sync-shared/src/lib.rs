//! # Solr Sync Shared
//!
//! Shared types and data structures for the Solr sync service.
//!
//! This crate defines the resource-type discriminator, the relational
//! records fetched from MySQL, the Solr-facing document representation,
//! and the receipt returned for a successful sync.

pub mod document;
pub mod record;
pub mod receipt;
pub mod resource;

pub use document::SolrDocument;
pub use record::{BookRecord, ElectronicRecord, Record};
pub use receipt::SyncReceipt;
pub use resource::ResourceType;
