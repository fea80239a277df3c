//! Process-wide chat state, built once at startup.

use log::debug;

use crate::chat::resolver::resolve;
use crate::error::Result;
use crate::knowledge::KnowledgeBase;
use crate::ml::intent_classifier::{self, IntentClassifier};
use crate::ml::models::ClassifierConfig;

/// A single answered turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Intent predicted for the input.
    pub intent: String,
    /// Text shown to the user.
    pub answer: String,
}

/// The knowledge base together with the classifier trained on it.
pub struct ChatContext {
    knowledge: KnowledgeBase,
    classifier: Box<dyn IntentClassifier>,
}

impl ChatContext {
    /// Pair a knowledge base with an already built classifier.
    pub fn new(knowledge: KnowledgeBase, classifier: Box<dyn IntentClassifier>) -> Self {
        Self {
            knowledge,
            classifier,
        }
    }

    /// Train a classifier on `knowledge` and wrap both.
    pub fn train(knowledge: KnowledgeBase, config: &ClassifierConfig) -> Result<Self> {
        let classifier = intent_classifier::train(&knowledge, config)?;
        Ok(Self::new(knowledge, Box::new(classifier)))
    }

    /// Classify `input` and resolve the reply.
    pub fn respond(&self, input: &str) -> Result<Reply> {
        let intent = self.classifier.predict(input)?;
        let answer = resolve(&intent, &self.knowledge, input);
        debug!("Resolved intent '{intent}' with {}", self.classifier.name());
        Ok(Reply { intent, answer })
    }

    /// Get the knowledge base.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Get the classifier.
    pub fn classifier(&self) -> &dyn IntentClassifier {
        self.classifier.as_ref()
    }
}

impl std::fmt::Debug for ChatContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatContext")
            .field("entries", &self.knowledge.len())
            .field("classifier", &self.classifier.name())
            .finish()
    }
}
