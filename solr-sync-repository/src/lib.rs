//! # Solr Sync Repository
//!
//! This crate provides traits and implementations for the sync service's
//! two outbound dependencies: the MySQL record store and the Solr update
//! endpoint. It includes definitions for errors, interfaces, and concrete
//! implementations backed by sqlx and reqwest.

pub mod errors;
pub mod interfaces;
pub mod mysql;
pub mod solr;

pub use errors::{SolrError, StoreError};
pub use interfaces::{RecordStore, SearchEngineClient};
pub use mysql::{MySqlRecordStore, StoreConfig};
pub use solr::SolrClient;
