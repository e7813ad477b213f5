use std::sync::Arc;

use api_router::{api_routes, api_state::ApiState};
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use common::{storage::db::SurrealDbClient, utils::config::AppConfig};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn test_config() -> AppConfig {
    AppConfig {
        surrealdb_address: "mem://".to_string(),
        surrealdb_username: "root".to_string(),
        surrealdb_password: "root".to_string(),
        surrealdb_namespace: "test_ns".to_string(),
        surrealdb_database: "test_db".to_string(),
        http_port: 0,
    }
}

async fn test_app() -> Router {
    let db = Arc::new(
        SurrealDbClient::memory("test_ns", &Uuid::new_v4().to_string())
            .await
            .expect("Failed to start in-memory surrealdb"),
    );
    db.ensure_initialized()
        .await
        .expect("Failed to initialize indexes");

    let state = ApiState::with_client(db, test_config());

    Router::new().merge(api_routes()).with_state(state)
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body was not valid JSON")
}

fn post_ask(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("Failed to build request")
}

#[tokio::test]
async fn test_root_reports_running() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).expect("request"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Guru Chat API is running");
}

#[tokio::test]
async fn test_health_reports_db_ok() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["checks"]["db"], "ok");
}

#[tokio::test]
async fn test_list_gurus_seeds_and_stays_at_five() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::get("/api/gurus")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let gurus = body["gurus"].as_array().expect("gurus should be an array");
    assert_eq!(gurus.len(), 5);
    assert!(gurus.iter().all(|guru| guru["id"].is_string()));

    // Second listing must not duplicate the seeded defaults
    let response = app
        .oneshot(
            Request::get("/api/gurus")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("Request failed");
    let body = json_body(response).await;
    assert_eq!(body["gurus"].as_array().expect("array").len(), 5);
}

#[tokio::test]
async fn test_ask_creates_conversation_and_replies_in_style() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_ask(&json!({
            "guru_id": "zen",
            "user_message": "I'm stressed about work"
        })))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    let reply = body["reply"].as_str().expect("reply should be a string");
    assert!(reply.starts_with("Zen Reflection:"));

    let conversation_id = body["conversation_id"]
        .as_str()
        .expect("conversation_id should be a string");
    assert!(!conversation_id.is_empty());
    assert_ne!(conversation_id, "temp-session");

    // Follow-up on the same conversation keeps the id stable
    let response = app
        .oneshot(post_ask(&json!({
            "conversation_id": conversation_id,
            "guru_id": "zen",
            "user_message": "And my breathing is shallow"
        })))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["conversation_id"], conversation_id);
}

#[tokio::test]
async fn test_ask_unknown_guru_is_404() {
    let app = test_app().await;

    let response = app
        .oneshot(post_ask(&json!({
            "guru_id": "unknown-persona-xyz",
            "user_message": "hello"
        })))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Guru not found");
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_ask_with_user_name_is_accepted() {
    let app = test_app().await;

    let response = app
        .oneshot(post_ask(&json!({
            "guru_id": "sufi",
            "user_message": "",
            "user_name": "Ada"
        })))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let reply = body["reply"].as_str().expect("reply should be a string");
    assert!(reply.starts_with("Sufi Whisper:"));
    assert!(reply.contains("Silence can be a teacher."));
}
