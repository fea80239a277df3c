//! Intent classification over free-text input.
//!
//! # Architecture
//!
//! - `IntentClassifier` trait: common interface used by the chat layer
//! - `LinearIntentClassifier`: TF-IDF features fed to a linear SVM
//! - `TfIdfVectorizer`: feature extraction
//! - `IntentSample`: training data structure
//!
//! # Example
//!
//! ```rust,no_run
//! use parley::knowledge;
//! use parley::ml::intent_classifier::{self, IntentClassifier};
//! use parley::ml::models::ClassifierConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let knowledge = knowledge::load("knowledge_base.json")?;
//! let classifier = intent_classifier::train(&knowledge, &ClassifierConfig::default())?;
//!
//! let intent = classifier.predict("good morning")?;
//! # Ok(())
//! # }
//! ```

mod classifier;
mod core;
mod linear_classifier;
mod tfidf;
mod types;

pub use classifier::IntentClassifier;
pub use self::core::train;
pub use linear_classifier::LinearIntentClassifier;
pub use tfidf::TfIdfVectorizer;
pub use types::IntentSample;
