use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;

fn app() -> Router {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("PUBLIC_RPS", "1000");
    env::set_var("MAX_QUIZ_QUESTIONS", "20");
    let _ = pflegequiz_backend::config::init_config();
    let state = pflegequiz_backend::AppState::new();

    Router::new()
        .route(
            "/api/knowledge/search",
            get(pflegequiz_backend::routes::knowledge::search_knowledge),
        )
        .with_state(state)
}

async fn search(app: Router, query: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/knowledge/search?q={}", query))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn search_finds_matching_entries() {
    let (status, body) = search(app(), "Thrombose").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["count"].as_u64().unwrap() >= 1);
    for entry in body["results"].as_array().unwrap() {
        assert!(!entry["topic"].as_str().unwrap().is_empty());
        assert!(!entry["content"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn empty_query_returns_the_degenerate_slice() {
    let (status, body) = search(app(), "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 5);
    assert_eq!(body["results"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn unmatched_query_returns_no_entries() {
    let (status, body) = search(app(), "Quantenmechanik").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}
