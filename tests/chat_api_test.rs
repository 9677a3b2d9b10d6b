use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::post,
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

// The chat route is only exercised up to provider selection here; requests
// never leave the process because no API key is configured.
fn app() -> Router {
    env::remove_var("OPENAI_API_KEY");
    env::remove_var("ANTHROPIC_API_KEY");
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("PUBLIC_RPS", "1000");
    env::set_var("MAX_QUIZ_QUESTIONS", "20");
    let _ = pflegequiz_backend::config::init_config();
    let state = pflegequiz_backend::AppState::new();

    Router::new()
        .route("/api/chat", post(pflegequiz_backend::routes::chat::chat))
        .with_state(state)
}

async fn post_chat(app: Router, body: JsonValue) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn chat_without_configured_keys_answers_service_unavailable() {
    let body = json!({
        "messages": [ { "role": "user", "content": "Erkläre die Virchow-Trias." } ]
    });
    let (status, body) = post_chat(app(), body).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("key"));
}

#[tokio::test]
async fn chat_rejects_an_empty_message_list() {
    let (status, body) = post_chat(app(), json!({ "messages": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn chat_rejects_an_unconfigured_explicit_provider() {
    let body = json!({
        "messages": [ { "role": "user", "content": "Hallo" } ],
        "provider": "anthropic"
    });
    let (status, body) = post_chat(app(), body).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("ANTHROPIC_API_KEY"));
}
