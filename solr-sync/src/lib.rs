//! # Solr Sync
//!
//! Main library for the MySQL-to-Solr sync service.
//!
//! This crate provides the entry point, configuration and HTTP boundary
//! for running the sync pipeline.

pub mod api;
pub mod config;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during service initialization or execution.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Record store error.
    #[error("Store error: {0}")]
    StoreError(#[from] solr_sync_repository::StoreError),

    /// Solr client error.
    #[error("Solr error: {0}")]
    SolrError(#[from] solr_sync_repository::SolrError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ServiceError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
