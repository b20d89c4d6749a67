//! Solr client error types.

use thiserror::Error;

/// Errors that can occur during a Solr upsert.
///
/// The update endpoint can fail at two layers: the HTTP transport
/// (`TransportError`, `HttpStatus`) and the engine itself, which reports a
/// non-zero `responseHeader.status` inside an otherwise successful HTTP
/// response (`EngineStatus`). Both classify as index failures.
#[derive(Error, Debug)]
pub enum SolrError {
    /// The request never completed (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    TransportError(String),

    /// Solr answered with a non-2xx HTTP status.
    #[error("Solr returned HTTP status {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
        /// Response body, for logging.
        body: String,
    },

    /// Solr answered 2xx but the embedded response header reports a failure.
    #[error("Solr update failed with status {0}")]
    EngineStatus(i64),

    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The document could not be serialized for the wire.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The configured base URL is not a valid URL.
    #[error("Invalid Solr base URL: {0}")]
    InvalidUrl(String),
}

impl SolrError {
    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create an HTTP status error.
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}

impl From<reqwest::Error> for SolrError {
    fn from(err: reqwest::Error) -> Self {
        Self::TransportError(err.to_string())
    }
}
