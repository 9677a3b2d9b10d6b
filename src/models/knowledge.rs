use serde::{Deserialize, Serialize};

/// One indexed fact unit of the learning-content dataset.
///
/// Entries are defined once at startup and never mutated; everything the
/// quiz engine produces is derived from these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub topic: String,
    pub subtopic: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub source: String,
}

impl KnowledgeEntry {
    pub fn new(
        topic: &str,
        subtopic: &str,
        content: &str,
        keywords: &[&str],
        source: &str,
    ) -> Self {
        Self {
            topic: topic.to_string(),
            subtopic: subtopic.to_string(),
            content: content.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            source: source.to_string(),
        }
    }

    /// Sentences of `content`, split on `". "` with the trailing period of
    /// the last sentence stripped. Whitespace-trimmed, empty pieces dropped.
    pub fn sentences(&self) -> Vec<String> {
        self.content
            .split(". ")
            .map(|s| s.trim().trim_end_matches('.').to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
