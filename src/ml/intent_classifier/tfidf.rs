//! TF-IDF vectorizer for text feature extraction.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// TF-IDF vectorizer for text feature extraction.
///
/// Feature columns follow the lexicographic order of the vocabulary, term
/// frequencies are raw counts, the inverse document frequency is smoothed as
/// `ln((1 + n) / (1 + df)) + 1`, and every row is scaled to unit L2 norm.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> column index.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency for each column.
    idf: Vec<f64>,
    /// Total number of documents seen during training.
    n_documents: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Fit the vectorizer on training documents.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for doc in documents {
            let unique_tokens: HashSet<String> = self.tokenize(doc)?.into_iter().collect();
            for token in unique_tokens {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let n_documents = documents.len() as f64;
        let mut vocabulary = AHashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());

        for (idx, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n_documents) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = documents.len();

        Ok(())
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Terms outside the fitted vocabulary are ignored; a document with no
    /// known terms maps to the zero vector.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let mut features = vec![0.0; self.vocabulary.len()];

        for token in self.tokenize(document)? {
            if let Some(&idx) = self.vocabulary.get(&token) {
                features[idx] += 1.0;
            }
        }

        for (value, idf) in features.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        Ok(features)
    }

    /// Fit on the documents, then transform each of them.
    pub fn fit_transform(&mut self, documents: &[String]) -> Result<Vec<Vec<f64>>> {
        self.fit(documents)?;
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(text)?.map(|token| token.text).collect())
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column index of a term, if it is in the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::standard::StandardAnalyzer;

    fn fitted(documents: &[&str]) -> TfIdfVectorizer {
        let documents: Vec<String> = documents.iter().map(|d| d.to_string()).collect();
        let mut vectorizer = TfIdfVectorizer::new(Arc::new(StandardAnalyzer::new().unwrap()));
        vectorizer.fit(&documents).unwrap();
        vectorizer
    }

    #[test]
    fn test_tfidf_vectorizer() {
        let vectorizer = fitted(&[
            "what is machine learning",
            "how to install python",
            "buy laptop online",
        ]);
        assert_eq!(vectorizer.vocabulary_size(), 11);
        assert_eq!(vectorizer.n_documents(), 3);

        let features = vectorizer.transform("what is python").unwrap();
        assert_eq!(features.len(), vectorizer.vocabulary_size());
    }

    #[test]
    fn test_vocabulary_is_sorted() {
        let vectorizer = fitted(&["zebra apple", "mango"]);
        assert_eq!(vectorizer.term_index("apple"), Some(0));
        assert_eq!(vectorizer.term_index("mango"), Some(1));
        assert_eq!(vectorizer.term_index("zebra"), Some(2));
        assert_eq!(vectorizer.term_index("kiwi"), None);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let vectorizer = fitted(&["hello there", "hello world", "good morning world"]);
        let features = vectorizer.transform("Hello hello WORLD").unwrap();
        let norm: f64 = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rare_terms_weigh_more() {
        let vectorizer = fitted(&["hello there", "hello world", "hello friend"]);
        let features = vectorizer.transform("hello there").unwrap();
        let hello = features[vectorizer.term_index("hello").unwrap()];
        let there = features[vectorizer.term_index("there").unwrap()];
        assert!(there > hello);
    }

    #[test]
    fn test_unknown_terms_give_zero_vector() {
        let vectorizer = fitted(&["hello there", "bye now"]);
        let features = vectorizer.transform("completely unseen words").unwrap();
        assert!(features.iter().all(|v| *v == 0.0));
    }
}
