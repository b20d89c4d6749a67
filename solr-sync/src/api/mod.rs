//! HTTP boundary for the sync service.
//!
//! The boundary validates path parameters (resource type, positive numeric
//! id), invokes the orchestrator and maps pipeline outcomes to transport
//! status codes: NotFound to 404, store failures to 500 with a generic
//! body, index failures to 502, deadline expiry to 504.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use solr_sync_pipeline::{SyncError, SyncOrchestrator};
use solr_sync_shared::{ResourceType, SyncReceipt};

/// Shared state handed to every request task.
#[derive(Clone)]
pub struct AppState {
    /// The sync orchestrator.
    pub orchestrator: Arc<SyncOrchestrator>,
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/:resource/:id", post(sync_resource))
        .route("/:resource/:id/touch", post(touch_resource))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

async fn sync_resource(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    let (resource, id) = match parse_target(&resource, &id) {
        Ok(target) => target,
        Err(response) => return response,
    };

    info!(resource = %resource, id = id, "Processing sync request");
    to_response(resource, state.orchestrator.sync(resource, id).await)
}

async fn touch_resource(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    let (resource, id) = match parse_target(&resource, &id) {
        Ok(target) => target,
        Err(response) => return response,
    };

    info!(resource = %resource, id = id, "Processing touch-and-sync request");
    to_response(resource, state.orchestrator.touch_and_sync(resource, id).await)
}

/// Validate the path parameters.
///
/// The id must be a positive integer; anything else is rejected here and
/// never reaches the pipeline.
fn parse_target(resource: &str, id: &str) -> Result<(ResourceType, i64), Response> {
    let Some(resource) = ResourceType::from_path_segment(resource) else {
        return Err(error_response(StatusCode::NOT_FOUND, "unknown resource"));
    };

    match id.parse::<i64>() {
        Ok(id) if id > 0 => Ok((resource, id)),
        _ => Err(error_response(
            StatusCode::BAD_REQUEST,
            "invalid id parameter",
        )),
    }
}

fn to_response(resource: ResourceType, result: Result<SyncReceipt, SyncError>) -> Response {
    match result {
        Ok(receipt) => (
            StatusCode::OK,
            Json(json!({
                "resource": receipt.resource.collection(),
                "id": receipt.id,
                "status": "synced",
                "message": receipt.message,
            })),
        )
            .into_response(),
        Err(e) => {
            let (status, message) = classify(resource, &e);
            error_response(status, &message)
        }
    }
}

/// Map a pipeline failure to a status code and outward-facing message.
///
/// Store failures get a generic body; the detail was already logged by the
/// orchestrator and must not leak to the caller.
fn classify(resource: ResourceType, error: &SyncError) -> (StatusCode, String) {
    match error {
        SyncError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            format!("{} not found", resource.display_name().to_lowercase()),
        ),
        SyncError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database error".to_string()),
        SyncError::Index(_) => (StatusCode::BAD_GATEWAY, "failed to update solr".to_string()),
        SyncError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, "sync timed out".to_string()),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use chrono::Utc;
    use serde_json::Value;
    use tower::util::ServiceExt;

    use solr_sync_repository::{
        RecordStore, SearchEngineClient, SolrError, StoreError,
    };
    use solr_sync_shared::{BookRecord, Record, SolrDocument};

    struct StubStore {
        record: Option<Record>,
    }

    #[async_trait]
    impl RecordStore for StubStore {
        async fn get(&self, _: ResourceType, _: i64) -> Result<Option<Record>, StoreError> {
            Ok(self.record.clone())
        }

        async fn get_and_touch(
            &self,
            resource: ResourceType,
            id: i64,
        ) -> Result<Option<Record>, StoreError> {
            self.get(resource, id).await
        }
    }

    struct StubSearch;

    #[async_trait]
    impl SearchEngineClient for StubSearch {
        async fn upsert(&self, _: &str, _: &SolrDocument) -> Result<(), SolrError> {
            Ok(())
        }

        async fn health_check(&self) -> Result<bool, SolrError> {
            Ok(true)
        }
    }

    fn app(record: Option<Record>) -> Router {
        let orchestrator = Arc::new(SyncOrchestrator::new(
            Arc::new(StubStore { record }),
            Arc::new(StubSearch),
        ));
        router(AppState { orchestrator })
    }

    fn dune() -> Record {
        Record::Book(BookRecord {
            id: 42,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: "SciFi".to_string(),
            price: 9.99,
            in_stock: true,
            isbn: "123".to_string(),
            description: String::new(),
            updated_at: Utc::now(),
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(None)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_sync_success_body() {
        let response = app(Some(dune()))
            .oneshot(Request::post("/books/42").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "resource": "books",
                "id": 42,
                "status": "synced",
                "message": "Book 42 updated and synced to Solr",
            })
        );
    }

    #[tokio::test]
    async fn test_sync_not_found() {
        let response = app(None)
            .oneshot(Request::post("/books/99").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "book not found" })
        );
    }

    #[tokio::test]
    async fn test_rejects_malformed_id() {
        for id in ["abc", "-1", "0", "1.5"] {
            let response = app(Some(dune()))
                .oneshot(
                    Request::post(format!("/books/{}", id))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id {:?}", id);
        }
    }

    #[tokio::test]
    async fn test_rejects_unknown_resource() {
        let response = app(Some(dune()))
            .oneshot(Request::post("/gadgets/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "unknown resource" })
        );
    }

    #[tokio::test]
    async fn test_touch_route() {
        let response = app(Some(dune()))
            .oneshot(Request::post("/books/42/touch").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_error_classification() {
        let (status, message) = classify(
            ResourceType::Book,
            &SyncError::Store(StoreError::query("secret internal detail")),
        );
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        // Internal detail never reaches the caller.
        assert_eq!(message, "database error");

        let (status, _) = classify(
            ResourceType::Book,
            &SyncError::Index(SolrError::transport("connection refused")),
        );
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, _) = classify(
            ResourceType::Electronics,
            &SyncError::Timeout {
                resource: ResourceType::Electronics,
                id: 1,
            },
        );
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    }
}
