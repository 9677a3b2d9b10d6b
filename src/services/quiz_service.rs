use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::knowledge::KnowledgeBase;
use crate::models::knowledge::KnowledgeEntry;
use crate::models::question::{GeneratedQuestion, QuestionDraft};
use crate::services::template_service::{self, TemplateKind};

/// Assembles quizzes from the knowledge base.
///
/// Generation runs up to three passes with escalating leniency:
/// 1. every entry in shuffled order, templates tried in shuffled order;
/// 2. a second sweep over entries whose `(topic, source)` pair is still
///    unused;
/// 3. the always-succeeding fallback generator to top up to `count`.
///
/// A template that cannot serve an entry reports nothing; that is expected
/// flow control, never a fault. The result holds at most `count` questions
/// and fewer only when the (filtered) entry set cannot yield more.
#[derive(Clone)]
pub struct QuizService {
    knowledge: KnowledgeBase,
}

impl QuizService {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    pub fn generate_quiz(&self, count: usize, topic: Option<&str>) -> Vec<GeneratedQuestion> {
        self.generate_quiz_with(&mut rand::thread_rng(), count, topic)
    }

    /// Same as [`generate_quiz`](Self::generate_quiz) with a caller-supplied
    /// randomness source, so tests can run a seeded generator.
    pub fn generate_quiz_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        topic: Option<&str>,
    ) -> Vec<GeneratedQuestion> {
        let all = self.knowledge.entries();
        let pool: Vec<&KnowledgeEntry> = all
            .iter()
            .filter(|e| topic.map_or(true, |t| e.topic == t))
            .collect();

        let mut questions: Vec<GeneratedQuestion> = Vec::new();
        if pool.is_empty() || count == 0 {
            return questions;
        }

        // Question ids live for one run only; the counter is local on purpose
        // so concurrent generations cannot interfere.
        let mut next_id: i32 = 1;
        let mut used_pairs: HashSet<(String, String)> = HashSet::new();

        // Pass 1: one question per entry where any template applies.
        let mut order = pool.clone();
        order.shuffle(rng);
        for &entry in &order {
            if questions.len() >= count {
                break;
            }
            if let Some(draft) = try_templates(rng, entry, all) {
                used_pairs.insert((entry.topic.clone(), entry.source.clone()));
                questions.push(draft.into_question(next_id));
                next_id += 1;
            }
        }

        // Pass 2: retry entries whose (topic, source) pair is still unused.
        if questions.len() < count {
            let mut order = pool.clone();
            order.shuffle(rng);
            for &entry in &order {
                if questions.len() >= count {
                    break;
                }
                let pair = (entry.topic.clone(), entry.source.clone());
                if used_pairs.contains(&pair) {
                    continue;
                }
                if let Some(draft) = try_templates(rng, entry, all) {
                    used_pairs.insert(pair);
                    questions.push(draft.into_question(next_id));
                    next_id += 1;
                }
            }
        }

        // Pass 3: fallback questions until the count is met or the pool runs dry.
        if questions.len() < count {
            let mut order = pool.clone();
            order.shuffle(rng);
            for &entry in &order {
                if questions.len() >= count {
                    break;
                }
                if let Some(draft) = template_service::fallback_question(rng, entry, all) {
                    questions.push(draft.into_question(next_id));
                    next_id += 1;
                }
            }
        }

        tracing::debug!(
            requested = count,
            generated = questions.len(),
            topic = topic.unwrap_or("*"),
            "quiz generation finished"
        );
        questions
    }
}

/// Tries all four templates in shuffled order, first success wins.
fn try_templates<R: Rng + ?Sized>(
    rng: &mut R,
    entry: &KnowledgeEntry,
    all: &[KnowledgeEntry],
) -> Option<QuestionDraft> {
    let mut order = TemplateKind::ALL;
    order.shuffle(rng);
    order.iter().find_map(|kind| kind.try_build(rng, entry, all))
}
