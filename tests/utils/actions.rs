use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use super::setup::TestSetup;

/// Status and decoded JSON body of an API call
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Send a request through the router and decode the JSON body
    pub async fn send(&self, request: Request<Body>) -> ApiResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        ApiResponse { status, body }
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> ApiResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn get(&self, uri: &str) -> ApiResponse {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    /// Create a session and return its code
    pub async fn create_session(&self) -> String {
        let response = self
            .send(
                Request::builder()
                    .method("POST")
                    .uri("/api/create-session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["code"].as_str().unwrap().to_string()
    }

    pub async fn session_status(&self, code: &str) -> ApiResponse {
        self.get(&format!("/api/session/{code}")).await
    }

    pub async fn submit(&self, code: &str, nickname: &str, text: &str) -> ApiResponse {
        self.post_json(
            "/api/submit",
            json!({ "nickname": nickname, "response": text, "sessionCode": code }),
        )
        .await
    }

    pub async fn responses(&self, code: &str) -> ApiResponse {
        self.get(&format!("/api/responses?session={code}")).await
    }

    pub async fn clear(&self, code: &str) -> ApiResponse {
        self.post_json("/api/clear", json!({ "sessionCode": code }))
            .await
    }
}
