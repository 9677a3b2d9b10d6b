use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use validator::Validate;

use crate::dto::chat_dto::{ChatRequest, ChatResponse};
use crate::AppState;

#[axum::debug_handler]
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let content = state.ai_service.chat(&req).await?;
    Ok(Json(ChatResponse { content }).into_response())
}
