//! Helper functions for creating intent classifiers.

use std::sync::Arc;

use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::error::Result;
use crate::knowledge::KnowledgeBase;
use crate::ml::intent_classifier::linear_classifier::LinearIntentClassifier;
use crate::ml::models::ClassifierConfig;

/// Train a classifier on every `(question, intent)` pair of a knowledge base.
pub fn train(knowledge: &KnowledgeBase, config: &ClassifierConfig) -> Result<LinearIntentClassifier> {
    let analyzer = Arc::new(StandardAnalyzer::new()?);
    LinearIntentClassifier::new(&knowledge.samples(), analyzer, config.clone())
}
