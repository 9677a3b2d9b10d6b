use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use validator::Validate;

use crate::dto::quiz_dto::{
    GenerateQuizRequest, GenerateQuizResponse, TopicSummary, TopicsResponse,
};
use crate::error::Error;
use crate::AppState;

#[axum::debug_handler]
pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(req): Json<GenerateQuizRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let config = crate::config::get_config();
    if req.count > config.max_quiz_questions {
        return Err(Error::BadRequest(format!(
            "count must not exceed {}",
            config.max_quiz_questions
        )));
    }

    let questions = state
        .quiz_service
        .generate_quiz(req.count, req.topic.as_deref());
    tracing::info!(
        "Generated {} of {} requested questions (topic: {})",
        questions.len(),
        req.count,
        req.topic.as_deref().unwrap_or("*")
    );

    let response = GenerateQuizResponse {
        quiz_id: uuid::Uuid::new_v4(),
        generated_at: Utc::now(),
        requested: req.count,
        count: questions.len(),
        topic: req.topic,
        questions,
    };
    Ok(Json(response).into_response())
}

#[axum::debug_handler]
pub async fn list_topics(State(state): State<AppState>) -> crate::error::Result<Response> {
    let topics = state
        .knowledge
        .topic_counts()
        .into_iter()
        .map(|(topic, entries)| TopicSummary { topic, entries })
        .collect();
    Ok(Json(TopicsResponse { topics }).into_response())
}
