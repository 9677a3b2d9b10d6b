use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::knowledge::KnowledgeEntry;
use crate::models::question::QuestionDraft;

/// Every generated question carries exactly this many options.
pub const OPTION_COUNT: usize = 4;

/// A question-generation strategy. Each consumes one knowledge entry and
/// produces at most one question; an unmet precondition is reported as
/// `None`, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// "Which statement about X is correct?"
    Statement,
    /// "Which term does NOT belong to X?"
    Exclusion,
    /// "Which topic does this excerpt belong to?"
    Classification,
    /// "How does this sentence end?"
    Cloze,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Statement,
        TemplateKind::Exclusion,
        TemplateKind::Classification,
        TemplateKind::Cloze,
    ];

    pub fn try_build<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        entry: &KnowledgeEntry,
        all: &[KnowledgeEntry],
    ) -> Option<QuestionDraft> {
        match self {
            TemplateKind::Statement => statement_question(rng, entry, all),
            TemplateKind::Exclusion => exclusion_question(rng, entry, all),
            TemplateKind::Classification => classification_question(rng, entry, all),
            TemplateKind::Cloze => cloze_question(rng, entry, all),
        }
    }
}

/// Sentence filter for the statement template: long enough to carry a fact,
/// short enough to read as a single answer option.
fn statement_sentences(entry: &KnowledgeEntry) -> Vec<String> {
    entry
        .sentences()
        .into_iter()
        .filter(|s| {
            let len = char_len(s);
            len > 20 && len < 150
        })
        .collect()
}

fn statement_question<R: Rng + ?Sized>(
    rng: &mut R,
    entry: &KnowledgeEntry,
    all: &[KnowledgeEntry],
) -> Option<QuestionDraft> {
    let own = statement_sentences(entry);
    if own.len() < 2 {
        return None;
    }
    let correct = own.choose(rng)?.clone();

    let wrong_pool = dedup_preserving(
        all.iter()
            .filter(|&e| !same_entry_key(e, entry))
            .flat_map(statement_sentences)
            .filter(|s| s != &correct)
            .collect(),
    );
    if wrong_pool.len() < 3 {
        return None;
    }
    let mut wrongs = wrong_pool;
    wrongs.shuffle(rng);
    wrongs.truncate(3);

    let (options, correct_index) = shuffled_options(rng, correct.clone(), wrongs)?;
    Some(QuestionDraft {
        topic: entry.topic.clone(),
        question: format!("Welche Aussage zu \"{}\" ist richtig?", entry.subtopic),
        options,
        correct_index,
        explanation: format!("Richtig ist: \"{}.\"", correct),
        source: entry.source.clone(),
    })
}

fn exclusion_question<R: Rng + ?Sized>(
    rng: &mut R,
    entry: &KnowledgeEntry,
    all: &[KnowledgeEntry],
) -> Option<QuestionDraft> {
    if entry.keywords.len() < 2 {
        return None;
    }

    let foreign = dedup_preserving(
        all.iter()
            .filter(|e| e.topic != entry.topic)
            .flat_map(|e| e.keywords.iter().cloned())
            .filter(|k| !entry.keywords.contains(k))
            .collect(),
    );
    let odd_one = foreign.choose(rng)?.clone();

    let mut own = entry.keywords.clone();
    own.shuffle(rng);
    own.truncate(OPTION_COUNT - 1);

    let (options, correct_index) = shuffled_options(rng, odd_one.clone(), own)?;
    Some(QuestionDraft {
        topic: entry.topic.clone(),
        question: format!(
            "Welcher Begriff gehört NICHT zum Thema \"{}\"?",
            entry.subtopic
        ),
        options,
        correct_index,
        explanation: format!(
            "\"{}\" stammt aus einem anderen Themenbereich, die übrigen Begriffe gehören zu \"{}\".",
            odd_one, entry.subtopic
        ),
        source: entry.source.clone(),
    })
}

fn classification_question<R: Rng + ?Sized>(
    rng: &mut R,
    entry: &KnowledgeEntry,
    all: &[KnowledgeEntry],
) -> Option<QuestionDraft> {
    if char_len(&entry.content) < 40 {
        return None;
    }
    let snippet: String = entry.content.chars().take(100).collect();

    let mut others = distinct_other_topics(all, &entry.topic);
    if others.len() < 3 {
        return None;
    }
    others.shuffle(rng);
    others.truncate(3);

    let (options, correct_index) = shuffled_options(rng, entry.topic.clone(), others)?;
    Some(QuestionDraft {
        topic: entry.topic.clone(),
        question: format!(
            "Zu welchem Thema gehört folgende Aussage? \"{}…\"",
            snippet.trim_end()
        ),
        options,
        correct_index,
        explanation: format!(
            "Der Auszug stammt aus dem Abschnitt \"{}\" zum Thema {}.",
            entry.subtopic, entry.topic
        ),
        source: entry.source.clone(),
    })
}

/// Splits a sentence into prompt prefix and ending at 60% of its words.
fn cloze_split(sentence: &str) -> Option<(String, String)> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() < 6 {
        return None;
    }
    let cut = words.len() * 60 / 100;
    Some((words[..cut].join(" "), words[cut..].join(" ")))
}

fn cloze_question<R: Rng + ?Sized>(
    rng: &mut R,
    entry: &KnowledgeEntry,
    all: &[KnowledgeEntry],
) -> Option<QuestionDraft> {
    let candidates: Vec<String> = entry
        .sentences()
        .into_iter()
        .filter(|s| {
            let len = char_len(s);
            len > 30 && len < 120
        })
        .collect();
    let sentence = candidates.choose(rng)?.clone();
    let (prefix, correct_ending) = cloze_split(&sentence)?;

    let wrong_pool = dedup_preserving(
        all.iter()
            .filter(|&e| !same_entry_key(e, entry))
            .flat_map(|e| e.sentences())
            .filter(|s| char_len(s) >= 30)
            .filter_map(|s| cloze_split(&s).map(|(_, ending)| ending))
            .filter(|ending| ending != &correct_ending)
            .collect(),
    );
    if wrong_pool.len() < 3 {
        return None;
    }
    let mut wrongs = wrong_pool;
    wrongs.shuffle(rng);
    wrongs.truncate(3);

    let (options, correct_index) = shuffled_options(rng, correct_ending, wrongs)?;
    Some(QuestionDraft {
        topic: entry.topic.clone(),
        question: format!("Wie wird der folgende Satz korrekt ergänzt? \"{} …\"", prefix),
        options,
        correct_index,
        explanation: format!("Vollständig lautet der Satz: \"{}.\"", sentence),
        source: entry.source.clone(),
    })
}

/// Lowest-quality generator, used only to top a quiz up to the requested
/// count. Succeeds for every entry as long as the dataset holds at least
/// three other topics.
pub fn fallback_question<R: Rng + ?Sized>(
    rng: &mut R,
    entry: &KnowledgeEntry,
    all: &[KnowledgeEntry],
) -> Option<QuestionDraft> {
    let term = entry
        .keywords
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| entry.subtopic.clone());

    let mut others = distinct_other_topics(all, &entry.topic);
    if others.len() < 3 {
        return None;
    }
    others.shuffle(rng);
    others.truncate(3);

    let (options, correct_index) = shuffled_options(rng, entry.topic.clone(), others)?;
    Some(QuestionDraft {
        topic: entry.topic.clone(),
        question: format!("Zu welchem Thema gehört der Begriff \"{}\"?", term),
        options,
        correct_index,
        explanation: format!("\"{}\" gehört zum Thema {}.", term, entry.topic),
        source: entry.source.clone(),
    })
}

fn same_entry_key(a: &KnowledgeEntry, b: &KnowledgeEntry) -> bool {
    a.topic == b.topic && a.subtopic == b.subtopic
}

fn distinct_other_topics(all: &[KnowledgeEntry], own_topic: &str) -> Vec<String> {
    dedup_preserving(
        all.iter()
            .filter(|e| e.topic != own_topic)
            .map(|e| e.topic.clone())
            .collect(),
    )
}

fn dedup_preserving(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| seen.insert(v.clone())).collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Appends the correct answer to the wrong ones, shuffles, and reports where
/// the correct one landed. Rejects drafts that do not form exactly four
/// pairwise distinct options.
fn shuffled_options<R: Rng + ?Sized>(
    rng: &mut R,
    correct: String,
    wrongs: Vec<String>,
) -> Option<(Vec<String>, usize)> {
    let mut options = wrongs;
    options.push(correct.clone());
    if options.len() != OPTION_COUNT {
        return None;
    }
    let mut seen = HashSet::new();
    if !options.iter().all(|o| seen.insert(o.clone())) {
        return None;
    }
    options.shuffle(rng);
    let correct_index = options.iter().position(|o| o == &correct)?;
    Some((options, correct_index))
}
