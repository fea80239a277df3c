//! Intent classifier trait definition.

use crate::error::Result;

/// Intent classifier trait.
///
/// The chat layer only depends on this trait, so a session can run on top
/// of any classifier, trained or hand-written.
pub trait IntentClassifier: Send + Sync {
    /// Predict the intent label for the given text.
    ///
    /// Implementations always return some label; there is no "unknown".
    fn predict(&self, text: &str) -> Result<String>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
