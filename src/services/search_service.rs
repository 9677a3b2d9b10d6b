use crate::knowledge::KnowledgeBase;
use crate::models::knowledge::KnowledgeEntry;

/// Keyword-overlap search over the knowledge base.
///
/// Scoring is plain substring containment: a query token counts once when it
/// appears anywhere in the entry's combined text, regardless of how often.
/// The corpus is small and curated, so precision against the keyword lists
/// matters more than recall sophistication.
#[derive(Clone)]
pub struct SearchService {
    knowledge: KnowledgeBase,
}

/// Queries reduced to tokens of this length or shorter get the degenerate
/// first-5 slice instead of a scored result.
const SHORT_QUERY_FALLBACK: usize = 5;

impl SearchService {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Entries ordered by descending number of matched query tokens.
    ///
    /// An empty query, or one containing only tokens of length <= 2, returns
    /// the first five entries of the dataset. Callers must not read that as
    /// "nothing matched".
    pub fn search_knowledge(&self, query: &str) -> Vec<KnowledgeEntry> {
        let mut tokens: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .filter(|t| t.chars().count() > 2)
            .collect();
        // a repeated token must not count twice
        tokens.sort();
        tokens.dedup();

        if tokens.is_empty() {
            return self
                .knowledge
                .entries()
                .iter()
                .take(SHORT_QUERY_FALLBACK)
                .cloned()
                .collect();
        }

        let mut scored: Vec<(usize, &KnowledgeEntry)> = self
            .knowledge
            .entries()
            .iter()
            .filter_map(|entry| {
                let haystack = entry_haystack(entry);
                let score = tokens.iter().filter(|t| haystack.contains(t.as_str())).count();
                (score > 0).then_some((score, entry))
            })
            .collect();

        // Stable sort keeps dataset order among equal scores deterministic.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, e)| e.clone()).collect()
    }
}

fn entry_haystack(entry: &KnowledgeEntry) -> String {
    let mut haystack = format!("{} {} {}", entry.topic, entry.subtopic, entry.content);
    for keyword in &entry.keywords {
        haystack.push(' ');
        haystack.push_str(keyword);
    }
    haystack.to_lowercase()
}
