//! Common types for intent classification.

use serde::{Deserialize, Serialize};

/// Training sample for intent classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentSample {
    /// Utterance text.
    pub text: String,
    /// Intent label.
    pub intent: String,
}

impl IntentSample {
    /// Create a new training sample.
    pub fn new<T: Into<String>, I: Into<String>>(text: T, intent: I) -> Self {
        Self {
            text: text.into(),
            intent: intent.into(),
        }
    }
}
