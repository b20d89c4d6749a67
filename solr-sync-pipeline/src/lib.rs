//! # Solr Sync Pipeline
//!
//! This crate provides the pipeline components for syncing relational
//! records into Solr.
//!
//! ## Architecture
//!
//! The pipeline follows a fetch-map-upsert flow per request:
//!
//! 1. **Record Store**: fetches the authoritative record from MySQL
//! 2. **Mapper**: transforms the record into a Solr document (pure)
//! 3. **Search Engine Client**: upserts the document into the collection
//! 4. **Orchestrator**: coordinates the three steps and classifies failures

pub mod errors;
pub mod mapper;
pub mod orchestrator;

pub use errors::SyncError;
pub use orchestrator::SyncOrchestrator;
