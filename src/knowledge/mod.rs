pub mod dataset;

use crate::models::knowledge::KnowledgeEntry;
use std::sync::Arc;

/// Shared, read-only handle on the learning-content dataset.
///
/// Cheap to clone; services hold their own handle the same way they would
/// hold a connection pool.
#[derive(Clone)]
pub struct KnowledgeBase {
    entries: Arc<[KnowledgeEntry]>,
}

impl KnowledgeBase {
    /// The compiled-in nursing-education dataset.
    pub fn builtin() -> Self {
        Self::from_entries(dataset::builtin_entries())
    }

    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct topics in first-seen order.
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = Vec::new();
        for entry in self.entries.iter() {
            if !topics.contains(&entry.topic) {
                topics.push(entry.topic.clone());
            }
        }
        topics
    }

    /// Distinct topics with their entry counts, in first-seen order.
    pub fn topic_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for entry in self.entries.iter() {
            match counts.iter_mut().find(|(t, _)| t == &entry.topic) {
                Some((_, n)) => *n += 1,
                None => counts.push((entry.topic.clone(), 1)),
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_is_well_formed() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.len() >= 30, "expected at least 30 entries, got {}", kb.len());
        // The fallback generator relies on at least 4 distinct topics.
        assert!(kb.topics().len() >= 4);

        for entry in kb.entries() {
            assert!(!entry.topic.is_empty());
            assert!(!entry.subtopic.is_empty());
            assert!(!entry.source.is_empty());
            assert!(
                entry.keywords.len() >= 3,
                "entry '{}' needs at least 3 keywords",
                entry.subtopic
            );
            assert!(
                entry.content.chars().count() >= 40,
                "entry '{}' content too short",
                entry.subtopic
            );
        }
    }

    #[test]
    fn topic_counts_sum_to_len() {
        let kb = KnowledgeBase::builtin();
        let total: usize = kb.topic_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, kb.len());
    }
}
