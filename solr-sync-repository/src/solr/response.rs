//! Solr update response envelope and classification.
//!
//! Solr can report failure at two layers: the HTTP status line and an
//! embedded `responseHeader.status` inside a 2xx response. Both must be
//! inspected; a 200 carrying a non-zero embedded status is still a failure.

use serde::Deserialize;

use crate::errors::SolrError;

/// The `responseHeader` structure embedded in every Solr response.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseHeader {
    pub status: i64,
}

/// Envelope of an update response, ignoring fields we don't inspect.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateResponse {
    #[serde(rename = "responseHeader")]
    pub response_header: ResponseHeader,
}

/// Classify an update response from its HTTP status and raw body.
///
/// # Returns
///
/// * `Ok(())` - 2xx status and embedded `responseHeader.status == 0`
/// * `Err(SolrError)` - Anything else, with the failing layer as detail
pub(crate) fn classify_update_response(http_status: u16, body: &str) -> Result<(), SolrError> {
    if !(200..300).contains(&http_status) {
        return Err(SolrError::http_status(http_status, body));
    }

    let response: UpdateResponse =
        serde_json::from_str(body).map_err(|e| SolrError::parse(e.to_string()))?;

    if response.response_header.status != 0 {
        return Err(SolrError::EngineStatus(response.response_header.status));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let body = r#"{"responseHeader":{"status":0,"QTime":12}}"#;
        assert!(classify_update_response(200, body).is_ok());
    }

    #[test]
    fn test_http_failure() {
        let result = classify_update_response(503, "Service Unavailable");
        assert!(matches!(
            result,
            Err(SolrError::HttpStatus { status: 503, .. })
        ));
    }

    #[test]
    fn test_embedded_failure_on_http_success() {
        // Solr can answer 200 while the operation itself failed.
        let body = r#"{"responseHeader":{"status":1,"QTime":3}}"#;
        let result = classify_update_response(200, body);
        assert!(matches!(result, Err(SolrError::EngineStatus(1))));
    }

    #[test]
    fn test_unparseable_body() {
        let result = classify_update_response(200, "not json");
        assert!(matches!(result, Err(SolrError::ParseError(_))));
    }
}
