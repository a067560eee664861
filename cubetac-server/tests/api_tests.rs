//! Integration tests for the cubetac-server API

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use cubetac_server::{create_router, ServerState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let state = Arc::new(ServerState::new());
    create_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = test_app();

    let response = app.oneshot(get("/api/status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["engine"], "rust");
}

#[tokio::test]
async fn test_lines_endpoint() {
    let app = test_app();

    let response = app.oneshot(get("/api/lines")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let layer_lines = json["layer_lines"].as_array().unwrap();
    assert_eq!(layer_lines.len(), 3);
    for layer in layer_lines {
        assert_eq!(layer.as_array().unwrap().len(), 8);
    }
    assert_eq!(json["cross_lines"].as_array().unwrap().len(), 25);
    assert_eq!(json["cross_lines"][0], json!([0, 9, 18]));
}

#[tokio::test]
async fn test_start_and_state() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post("/api/game/start", json!({"session": "s1", "mode": "pve"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["board"].as_array().unwrap().len(), 27);
    assert!(json["board"].as_array().unwrap().iter().all(Value::is_null));
    assert_eq!(json["current_player"], "X");
    assert_eq!(json["result"], "Ongoing");
    assert_eq!(json["score"], json!([0, 0]));

    let response = app
        .oneshot(get("/api/game/state?session=s1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_session_is_404() {
    let app = test_app();

    let response = app
        .oneshot(get("/api/game/state?session=missing"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_move_and_invalid_move() {
    let app = test_app();

    app.clone()
        .oneshot(post("/api/game/start", json!({"session": "s1"})))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post("/api/game/move", json!({"session": "s1", "index": 13})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["board"][13], "X");
    assert_eq!(json["current_player"], "O");

    // Same cell again: rejected, nothing changes
    let response = app
        .clone()
        .oneshot(post("/api/game/move", json!({"session": "s1", "index": 13})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .oneshot(get("/api/game/state?session=s1"))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["board"][13], "X");
    assert_eq!(json["current_player"], "O");
}

#[tokio::test]
async fn test_ai_move_flow() {
    let app = test_app();

    app.clone()
        .oneshot(post("/api/game/start", json!({"session": "s1", "mode": "pve"})))
        .await
        .unwrap();

    // Not the computer's turn yet
    let response = app
        .clone()
        .oneshot(post("/api/game/ai-move", json!({"session": "s1"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Human opens in a corner; the computer answers with the cube center
    app.clone()
        .oneshot(post("/api/game/move", json!({"session": "s1", "index": 0})))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post("/api/game/ai-move", json!({"session": "s1"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["index"], 13);
    assert_eq!(json["state"]["board"][13], "O");
    assert_eq!(json["state"]["current_player"], "X");
}

#[tokio::test]
async fn test_ai_move_rejected_in_pvp() {
    let app = test_app();

    app.clone()
        .oneshot(post("/api/game/start", json!({"session": "s1", "mode": "pvp"})))
        .await
        .unwrap();
    app.clone()
        .oneshot(post("/api/game/move", json!({"session": "s1", "index": 0})))
        .await
        .unwrap();

    let response = app
        .oneshot(post("/api/game/ai-move", json!({"session": "s1"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_reset() {
    let app = test_app();

    app.clone()
        .oneshot(post("/api/game/start", json!({"session": "s1"})))
        .await
        .unwrap();
    app.clone()
        .oneshot(post("/api/game/move", json!({"session": "s1", "index": 4})))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post("/api/game/reset", json!({"session": "s1"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["board"].as_array().unwrap().iter().all(Value::is_null));
    assert_eq!(json["current_player"], "X");
}
