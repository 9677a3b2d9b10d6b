use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::knowledge::KnowledgeEntry;
use crate::models::question::GeneratedQuestion;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    pub count: usize,

    // Empty or whitespace-only topic strings count as "no filter"
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateQuizResponse {
    pub quiz_id: uuid::Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub requested: usize,
    /// Authoritative number of questions returned; may be lower than
    /// `requested` when the (filtered) dataset cannot yield more.
    pub count: usize,
    pub topic: Option<String>,
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicSummary {
    pub topic: String,
    pub entries: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<TopicSummary>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub results: Vec<KnowledgeEntry>,
}

fn trim_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
