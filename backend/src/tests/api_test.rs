use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::config::Config;
use crate::tests::common::{FakeModel, state_with_model, state_without_model};
use crate::{AppState, build_router};

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_reports_dependencies() {
    let (status, body) = send(build_router(state_without_model()), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Zoota AI Backend");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["azure_configured"], false);
    assert_eq!(body["config_loaded"], true);
    assert_eq!(body["database_enabled"], false);
}

#[tokio::test]
async fn test_chat_without_model_uses_mock() {
    let app = build_router(state_without_model());
    let (status, body) =
        send(app, post_json("/api/chat", r#"{"message": "What services do you offer?", "history": []}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "mock");
    assert!(body["message"].as_str().unwrap().contains("• Web Development"));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_chat_model_failure_uses_mock_fallback() {
    let app = build_router(state_with_model(FakeModel::failing()));
    let (status, body) = send(app, post_json("/api/chat", r#"{"message": "Merhaba"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "mock_fallback");
    assert!(body["message"].as_str().unwrap().starts_with("Merhaba! Ben Zoota"));
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_chat_model_success() {
    let model = FakeModel::replying("Hello from the model");
    let app = build_router(state_with_model(model.clone()));
    let history = json!({
        "message": "Hi",
        "history": [
            {"role": "user", "content": "earlier"},
            {"role": "bogus", "content": "odd role"},
            {"content": "no role"}
        ]
    });
    let (status, body) = send(app, post_json("/api/chat", &history.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello from the model", "source": "azure_openai"}));

    let sent = model.last_request().messages;
    assert_eq!(sent.len(), 5);
    assert!(sent[1..4].iter().all(|m| m.role == crate::models::Role::User));
}

#[tokio::test]
async fn test_chat_empty_message_is_bad_request() {
    for payload in [r#"{"message": ""}"#, r#"{"message": "   "}"#, r#"{}"#] {
        let (status, body) = send(build_router(state_without_model()), post_json("/api/chat", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Message is required"}));
    }
}

#[tokio::test]
async fn test_chat_malformed_json_is_bad_request() {
    let (status, body) = send(build_router(state_without_model()), post_json("/api/chat", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_public_config() {
    let (status, body) = send(build_router(state_without_model()), get("/api/config")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "name": "Zoota AI Assistant",
            "version": "1.0.0",
            "welcomeMessage": "Hi! I'm Zoota.",
            "azureConfigured": false
        })
    );
}

#[tokio::test]
async fn test_public_config_without_loaded_file() {
    let state = Arc::new(AppState::new(Config::default(), None, None));
    let (status, body) = send(build_router(state), get("/api/config")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Configuration not loaded"}));
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let (status, body) = send(build_router(state_without_model()), get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/chat").is_some());
    assert!(body["paths"].get("/health").is_some());
    assert!(body["paths"].get("/api/config").is_some());
}
