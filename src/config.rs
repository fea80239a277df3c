//! Top-level configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chat::session::SessionConfig;
use crate::error::Result;
use crate::ml::models::ClassifierConfig;

/// Knowledge file used when no path is given.
pub const DEFAULT_KNOWLEDGE_PATH: &str = "knowledge_base.json";

/// Configuration for a Parley run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParleyConfig {
    /// Knowledge base file to train on and answer from.
    pub knowledge_path: PathBuf,
    /// Classifier hyper-parameters.
    pub classifier: ClassifierConfig,
    /// Prompt, reply label and quit command.
    pub session: SessionConfig,
}

impl Default for ParleyConfig {
    fn default() -> Self {
        Self {
            knowledge_path: PathBuf::from(DEFAULT_KNOWLEDGE_PATH),
            classifier: ClassifierConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl ParleyConfig {
    /// Check every nested configuration.
    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()
    }
}
