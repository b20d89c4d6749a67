//! Solr client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! against Solr's JSON update endpoint.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SolrError;
use crate::interfaces::SearchEngineClient;
use crate::solr::response::classify_update_response;
use solr_sync_shared::SolrDocument;

/// Fixed per-request timeout, independent of the caller's deadline.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Solr client for single-document upserts.
///
/// Posts to `{base_url}/{collection}/update?commit=true` with the document
/// wrapped in a one-element array (the update endpoint always expects a
/// sequence) and an immediate commit, so the write is visible to reads
/// before the call returns. No retries; retry policy belongs to callers.
pub struct SolrClient {
    base_url: String,
    http: reqwest::Client,
}

impl SolrClient {
    /// Create a new client for the given Solr base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. "http://localhost:8983/solr"
    ///
    /// # Returns
    ///
    /// * `Ok(SolrClient)` - A new client instance
    /// * `Err(SolrError)` - If the URL is malformed or client setup fails
    pub fn new(base_url: &str) -> Result<Self, SolrError> {
        Url::parse(base_url).map_err(|e| SolrError::invalid_url(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SolrError::transport(e.to_string()))?;

        info!(base_url = %base_url, "Created Solr client");

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Build the update URL for a collection.
    fn update_url(&self, collection: &str) -> String {
        format!("{}/{}/update?commit=true", self.base_url, collection)
    }

    /// Build the cores status URL used for health checks.
    fn status_url(&self) -> String {
        format!("{}/admin/cores?action=STATUS", self.base_url)
    }

    /// Encode the wire payload for one document.
    ///
    /// The update endpoint's bulk format expects a sequence even for a
    /// single document.
    fn encode_payload(document: &SolrDocument) -> Result<Vec<u8>, SolrError> {
        serde_json::to_vec(&[document]).map_err(|e| SolrError::serialization(e.to_string()))
    }
}

#[async_trait]
impl SearchEngineClient for SolrClient {
    async fn upsert(&self, collection: &str, document: &SolrDocument) -> Result<(), SolrError> {
        let url = self.update_url(collection);
        let payload = Self::encode_payload(document)?;

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        match classify_update_response(status, &body) {
            Ok(()) => {
                debug!(collection = %collection, "Document upserted");
                Ok(())
            }
            Err(e) => {
                error!(collection = %collection, status = status, error = %e, "Upsert failed");
                Err(e)
            }
        }
    }

    async fn health_check(&self) -> Result<bool, SolrError> {
        let response = self.http.get(self.status_url()).send().await?;

        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_url() {
        let client = SolrClient::new("http://localhost:8983/solr").unwrap();
        assert_eq!(
            client.update_url("books"),
            "http://localhost:8983/solr/books/update?commit=true"
        );
    }

    #[test]
    fn test_update_url_trailing_slash() {
        let client = SolrClient::new("http://localhost:8983/solr/").unwrap();
        assert_eq!(
            client.update_url("electronics"),
            "http://localhost:8983/solr/electronics/update?commit=true"
        );
    }

    #[test]
    fn test_rejects_malformed_base_url() {
        let result = SolrClient::new("not a url");
        assert!(matches!(result, Err(SolrError::InvalidUrl(_))));
    }

    #[test]
    fn test_encode_payload_wraps_document_in_array() {
        let mut doc = SolrDocument::new();
        doc.set_str("id", "book-1");

        let bytes = SolrClient::encode_payload(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["id"], "book-1");
    }
}
