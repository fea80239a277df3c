//! Intent classifier built from a TF-IDF vectorizer and a linear SVM.

use std::sync::Arc;

use log::{debug, info};

use super::classifier::IntentClassifier;
use super::tfidf::TfIdfVectorizer;
use super::types::IntentSample;
use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::ml::models::{ClassifierConfig, LinearSvc};

/// Trained intent classifier: fitted vocabulary plus decision parameters.
#[derive(Debug)]
pub struct LinearIntentClassifier {
    /// TF-IDF vectorizer.
    vectorizer: TfIdfVectorizer,
    /// Linear model over the TF-IDF features.
    model: LinearSvc,
}

impl LinearIntentClassifier {
    /// Train a classifier from samples with a specified analyzer.
    pub fn new(
        samples: &[IntentSample],
        analyzer: Arc<dyn Analyzer>,
        config: ClassifierConfig,
    ) -> Result<Self> {
        let mut model = LinearSvc::new(config)?;

        let documents: Vec<String> = samples.iter().map(|s| s.text.clone()).collect();
        let labels: Vec<String> = samples.iter().map(|s| s.intent.clone()).collect();

        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        let features = vectorizer.fit_transform(&documents)?;
        model.fit(&features, &labels)?;

        info!(
            "Trained intent classifier on {} samples: {} terms, {} intents (seed {})",
            samples.len(),
            vectorizer.vocabulary_size(),
            model.classes().len(),
            model.config().seed
        );

        Ok(Self { vectorizer, model })
    }

    /// Intent labels the classifier can return, in sorted order.
    pub fn intents(&self) -> &[String] {
        self.model.classes()
    }
}

impl IntentClassifier for LinearIntentClassifier {
    fn predict(&self, text: &str) -> Result<String> {
        let features = self.vectorizer.transform(text)?;
        let (intent, score) = self.model.predict_with_score(&features)?;
        debug!("Predicted intent '{intent}' (score {score:.4}) for {text:?}");
        Ok(intent.to_string())
    }

    fn name(&self) -> &str {
        "linear_svc"
    }
}
