use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Response},
};

use crate::dto::quiz_dto::{SearchQuery, SearchResponse};
use crate::AppState;

#[axum::debug_handler]
pub async fn search_knowledge(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> crate::error::Result<Response> {
    let results = state.search_service.search_knowledge(&query.q);
    Ok(Json(SearchResponse {
        count: results.len(),
        results,
    })
    .into_response())
}
