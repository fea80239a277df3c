//! Knowledge store: the question/intent/answer records the bot trains on
//! and answers from.
//!
//! The on-disk layout is a single JSON object with one array field:
//!
//! ```json
//! {
//!   "questions": [
//!     { "question": "Hello", "intent": "greeting", "answer": "Hi there!" }
//!   ]
//! }
//! ```

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{ParleyError, Result};
use crate::ml::intent_classifier::IntentSample;

/// A single question/intent/answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    /// Canonical training utterance.
    pub question: String,
    /// Intent label. Several entries may share one.
    pub intent: String,
    /// Reply returned verbatim for this intent.
    pub answer: String,
}

impl QaEntry {
    /// Create a new entry.
    pub fn new<Q, I, A>(question: Q, intent: I, answer: A) -> Self
    where
        Q: Into<String>,
        I: Into<String>,
        A: Into<String>,
    {
        QaEntry {
            question: question.into(),
            intent: intent.into(),
            answer: answer.into(),
        }
    }
}

/// The in-memory knowledge base, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    questions: Vec<QaEntry>,
}

impl KnowledgeBase {
    /// Create a knowledge base from entries, preserving their order.
    pub fn new(entries: Vec<QaEntry>) -> Self {
        KnowledgeBase { questions: entries }
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[QaEntry] {
        &self.questions
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the knowledge base has no entries.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Append an entry after all existing ones.
    pub fn add_entry(&mut self, entry: QaEntry) {
        self.questions.push(entry);
    }

    /// Answer of the first entry whose intent equals `intent`.
    pub fn answer_for(&self, intent: &str) -> Option<&str> {
        self.questions
            .iter()
            .find(|entry| entry.intent == intent)
            .map(|entry| entry.answer.as_str())
    }

    /// Distinct intents in order of first appearance.
    pub fn intents(&self) -> Vec<&str> {
        let mut intents: Vec<&str> = Vec::new();
        for entry in &self.questions {
            if !intents.contains(&entry.intent.as_str()) {
                intents.push(&entry.intent);
            }
        }
        intents
    }

    /// Number of questions per distinct intent, in order of first appearance.
    pub fn intent_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for entry in &self.questions {
            match counts.iter_mut().find(|(intent, _)| *intent == entry.intent) {
                Some((_, count)) => *count += 1,
                None => counts.push((&entry.intent, 1)),
            }
        }
        counts
    }

    /// All `(question, intent)` pairs as training samples.
    pub fn samples(&self) -> Vec<IntentSample> {
        self.questions
            .iter()
            .map(|entry| IntentSample {
                text: entry.question.clone(),
                intent: entry.intent.clone(),
            })
            .collect()
    }
}

/// Load a knowledge base from a JSON file.
///
/// A missing file yields [`ParleyError::NotFound`]; malformed JSON or a record
/// without all three fields yields [`ParleyError::Parse`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<KnowledgeBase> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            ParleyError::not_found(format!("knowledge base file {}", path.display()))
        }
        _ => ParleyError::Io(e),
    })?;

    let knowledge: KnowledgeBase = serde_json::from_str(&content)
        .map_err(|e| ParleyError::parse(format!("{}: {e}", path.display())))?;

    info!(
        "Loaded {} entries ({} intents) from {}",
        knowledge.len(),
        knowledge.intents().len(),
        path.display()
    );

    Ok(knowledge)
}

/// Save a knowledge base as pretty-printed JSON, overwriting the file.
pub fn save<P: AsRef<Path>>(path: P, knowledge: &KnowledgeBase) -> Result<()> {
    let path = path.as_ref();
    let mut json = serde_json::to_string_pretty(knowledge)?;
    json.push('\n');
    fs::write(path, json)?;

    debug!("Saved {} entries to {}", knowledge.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_knowledge() -> KnowledgeBase {
        KnowledgeBase::new(vec![
            QaEntry::new("Hello", "greeting", "Hi there!"),
            QaEntry::new("What is 2 + 2", "math", ""),
            QaEntry::new("Good morning", "greeting", "Morning!"),
            QaEntry::new("Bye", "farewell", "See you."),
        ])
    }

    #[test]
    fn test_answer_for_first_match_wins() {
        let knowledge = sample_knowledge();
        assert_eq!(knowledge.answer_for("greeting"), Some("Hi there!"));
        assert_eq!(knowledge.answer_for("farewell"), Some("See you."));
        assert_eq!(knowledge.answer_for("weather"), None);
    }

    #[test]
    fn test_intents_in_first_appearance_order() {
        let knowledge = sample_knowledge();
        assert_eq!(knowledge.intents(), vec!["greeting", "math", "farewell"]);
        assert_eq!(
            knowledge.intent_counts(),
            vec![("greeting", 2), ("math", 1), ("farewell", 1)]
        );
    }

    #[test]
    fn test_samples_follow_entries() {
        let knowledge = sample_knowledge();
        let samples = knowledge.samples();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[1].text, "What is 2 + 2");
        assert_eq!(samples[1].intent, "math");
    }

    #[test]
    fn test_add_entry_appends() {
        let mut knowledge = KnowledgeBase::default();
        assert!(knowledge.is_empty());

        knowledge.add_entry(QaEntry::new("Hi", "greeting", "Hello!"));
        knowledge.add_entry(QaEntry::new("Hey", "greeting", "Yo!"));

        assert_eq!(knowledge.len(), 2);
        assert_eq!(knowledge.entries()[1].question, "Hey");
        assert_eq!(knowledge.answer_for("greeting"), Some("Hello!"));
    }

    #[test]
    fn test_json_layout() {
        let json = r#"{"questions": [{"question": "Hi", "intent": "greeting", "answer": "Hello!"}]}"#;
        let knowledge: KnowledgeBase = serde_json::from_str(json).unwrap();
        assert_eq!(knowledge.entries()[0], QaEntry::new("Hi", "greeting", "Hello!"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"questions": [{"question": "Hi", "intent": "greeting"}]}"#;
        assert!(serde_json::from_str::<KnowledgeBase>(json).is_err());
    }
}
