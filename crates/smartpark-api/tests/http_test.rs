//! HTTP surface tests: routing, identity extraction, and error mapping.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use smartpark_core::config::AppConfig;

/// Test application wrapping the full router over a fresh store.
struct TestApp {
    router: Router,
}

/// Response from a test request.
#[derive(Debug)]
struct TestResponse {
    status: StatusCode,
    body: Value,
}

impl TestApp {
    fn new() -> Self {
        let state = smartpark_api::build_state(AppConfig::default());
        Self {
            router: smartpark_api::build_router(state),
        }
    }

    /// Make an HTTP request, optionally with a caller identity header.
    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        user: Option<Uuid>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(user) = user {
            req = req.header("x-user-id", user.to_string());
        }

        let req = req.body(Body::from(body_str)).expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Register a lot and return its id.
    async fn create_lot(&self, user: Uuid, name: &str, capacity: u32) -> String {
        let response = self
            .request(
                "POST",
                "/api/lots",
                Some(serde_json::json!({ "name": name, "max_capacity": capacity })),
                Some(user),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "create lot failed: {:?}",
            response.body
        );
        response.body["data"]["id"]
            .as_str()
            .expect("lot id in response")
            .to_string()
    }
}

fn error_code(response: &TestResponse) -> &str {
    response.body["error"].as_str().unwrap_or("")
}

#[tokio::test]
async fn test_health_requires_no_identity() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "ok");
}

#[tokio::test]
async fn test_missing_identity_header_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/lots",
            Some(serde_json::json!({ "name": "central", "max_capacity": 5 })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&response), "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_malformed_identity_header_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/lots")
                .header("x-user-id", "not-a-uuid")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("send request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_zero_capacity_lot_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/lots",
            Some(serde_json::json!({ "name": "empty", "max_capacity": 0 })),
            Some(Uuid::new_v4()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response), "VALIDATION");
}

#[tokio::test]
async fn test_unknown_lot_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            &format!("/api/lots/{}", Uuid::new_v4()),
            None,
            Some(Uuid::new_v4()),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&response), "NOT_FOUND");
}

#[tokio::test]
async fn test_check_in_flow_over_http() {
    let app = TestApp::new();
    let driver = Uuid::new_v4();
    let lot_id = app.create_lot(driver, "gate-a", 1).await;

    // Check in and claim the only slot.
    let response = app
        .request(
            "POST",
            &format!("/api/lots/{lot_id}/check-in"),
            None,
            Some(driver),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ACTIVE");
    let session_id = response.body["data"]["id"].as_str().expect("session id");

    // A second driver is turned away.
    let full = app
        .request(
            "POST",
            &format!("/api/lots/{lot_id}/check-in"),
            None,
            Some(Uuid::new_v4()),
        )
        .await;
    assert_eq!(full.status, StatusCode::CONFLICT);
    assert_eq!(error_code(&full), "CAPACITY_EXCEEDED");

    // Check out, releasing the slot.
    let response = app
        .request(
            "POST",
            &format!("/api/sessions/{session_id}/check-out"),
            None,
            Some(driver),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let lot = app
        .request("GET", &format!("/api/lots/{lot_id}"), None, Some(driver))
        .await;
    assert_eq!(lot.body["data"]["current_occupancy"], 0);
    assert_eq!(lot.body["data"]["available"], 1);

    // Completed session is still readable.
    let session = app
        .request(
            "GET",
            &format!("/api/sessions/{session_id}"),
            None,
            Some(driver),
        )
        .await;
    assert_eq!(session.status, StatusCode::OK);
    assert_eq!(session.body["data"]["status"], "COMPLETED");

    // Repeated check-out is rejected.
    let repeat = app
        .request(
            "POST",
            &format!("/api/sessions/{session_id}/check-out"),
            None,
            Some(driver),
        )
        .await;
    assert_eq!(repeat.status, StatusCode::CONFLICT);
    assert_eq!(error_code(&repeat), "INVALID_SESSION");
}

#[tokio::test]
async fn test_token_flow_over_http() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();

    let issued = app.request("POST", "/api/tokens", None, Some(owner)).await;
    assert_eq!(issued.status, StatusCode::OK);
    let token = issued.body["data"]["token"].as_str().expect("token value");
    assert!(issued.body["data"]["expires_at"].is_string());

    // The gate validates on the owner's behalf.
    let validated = app
        .request(
            "POST",
            "/api/tokens/validate",
            Some(serde_json::json!({ "token": token })),
            Some(Uuid::new_v4()),
        )
        .await;
    assert_eq!(validated.status, StatusCode::OK);
    assert_eq!(
        validated.body["data"]["user_id"].as_str(),
        Some(owner.to_string().as_str())
    );

    // Second presentation of the same token is rejected.
    let reused = app
        .request(
            "POST",
            "/api/tokens/validate",
            Some(serde_json::json!({ "token": token })),
            Some(Uuid::new_v4()),
        )
        .await;
    assert_eq!(reused.status, StatusCode::CONFLICT);
    assert_eq!(error_code(&reused), "INVALID_TOKEN");
}

#[tokio::test]
async fn test_list_lots() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    app.create_lot(user, "east", 10).await;
    app.create_lot(user, "west", 20).await;

    let response = app.request("GET", "/api/lots", None, Some(user)).await;

    assert_eq!(response.status, StatusCode::OK);
    let lots = response.body["data"].as_array().expect("lot array");
    assert_eq!(lots.len(), 2);
}
