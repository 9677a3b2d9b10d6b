use std::collections::HashSet;
use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn app() -> Router {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("PUBLIC_RPS", "1000");
    env::set_var("MAX_QUIZ_QUESTIONS", "20");
    let _ = pflegequiz_backend::config::init_config();
    let state = pflegequiz_backend::AppState::new();

    Router::new()
        .route("/health", get(pflegequiz_backend::routes::health::health))
        .route(
            "/api/quiz/generate",
            post(pflegequiz_backend::routes::quiz::generate_quiz),
        )
        .route(
            "/api/quiz/topics",
            get(pflegequiz_backend::routes::quiz::list_topics),
        )
        .layer(axum::middleware::from_fn_with_state(
            pflegequiz_backend::middleware::rate_limit::RateLimiter::per_second(1000),
            pflegequiz_backend::middleware::rate_limit::rps_middleware,
        ))
        .with_state(state)
}

async fn post_json(app: Router, uri: &str, body: JsonValue) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn assert_question_shape(question: &JsonValue) {
    let options = question["options"].as_array().expect("options array");
    assert_eq!(options.len(), 4);
    let distinct: HashSet<&str> = options.iter().filter_map(|o| o.as_str()).collect();
    assert_eq!(distinct.len(), 4, "options must be pairwise distinct");

    let correct_index = question["correct_index"].as_u64().expect("correct_index");
    assert!(correct_index < 4);
    assert!(!question["question"].as_str().unwrap().is_empty());
    assert!(!question["source"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn health_returns_ok() {
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn generate_quiz_returns_requested_count() {
    let (status, body) = post_json(app(), "/api/quiz/generate", json!({ "count": 5 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requested"], 5);
    assert_eq!(body["count"], 5);

    let questions = body["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 5);
    for question in questions {
        assert_question_shape(question);
    }

    let ids: Vec<i64> = questions
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn generate_quiz_respects_the_topic_filter() {
    let body = json!({ "count": 3, "topic": "Diabetes mellitus" });
    let (status, body) = post_json(app(), "/api/quiz/generate", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    for question in body["questions"].as_array().unwrap() {
        assert_eq!(question["topic"], "Diabetes mellitus");
    }
}

#[tokio::test]
async fn generate_quiz_for_unknown_topic_is_empty() {
    let body = json!({ "count": 10, "topic": "Astronautenmedizin" });
    let (status, body) = post_json(app(), "/api/quiz/generate", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert!(body["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn generate_quiz_treats_blank_topic_as_no_filter() {
    let body = json!({ "count": 2, "topic": "   " });
    let (status, body) = post_json(app(), "/api/quiz/generate", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert!(body["topic"].is_null());
}

#[tokio::test]
async fn generate_quiz_rejects_oversized_requests() {
    let (status, body) = post_json(app(), "/api/quiz/generate", json!({ "count": 1000 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("count"));
}

#[tokio::test]
async fn topics_endpoint_lists_the_dataset_topics() {
    let req = Request::builder()
        .method("GET")
        .uri("/api/quiz/topics")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    let topics = body["topics"].as_array().expect("topics array");
    assert!(topics.len() >= 4);
    assert!(topics
        .iter()
        .any(|t| t["topic"] == "Thrombose" && t["entries"].as_u64().unwrap() >= 1));
}
