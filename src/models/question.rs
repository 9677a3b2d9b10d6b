use serde::{Deserialize, Serialize};

/// A generated multiple-choice question.
///
/// `id` is unique and contiguous within one generation run. Exactly four
/// options, pairwise distinct; `options[correct_index]` is the correct one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub id: i32,
    pub topic: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub source: String,
}

/// A question as produced by a template, before the generator assigns an id.
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    pub topic: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub source: String,
}

impl QuestionDraft {
    pub fn into_question(self, id: i32) -> GeneratedQuestion {
        GeneratedQuestion {
            id,
            topic: self.topic,
            question: self.question,
            options: self.options,
            correct_index: self.correct_index,
            explanation: self.explanation,
            source: self.source,
        }
    }
}
