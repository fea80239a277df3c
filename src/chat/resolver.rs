//! Response resolution for a predicted intent.

use crate::knowledge::KnowledgeBase;
use crate::math;

/// Intent answered by the arithmetic evaluator instead of the knowledge base.
pub const MATH_INTENT: &str = "math";

/// Leading phrase removed from math questions before evaluation.
pub const MATH_PREFIX: &str = "What is";

/// Reply for an intent with no entry in the knowledge base.
pub const NO_ANSWER: &str = "I'm sorry, but I don't have an answer for that.";

/// Produce the reply for `intent`.
///
/// For [`MATH_INTENT`] every occurrence of the exact, case-sensitive
/// [`MATH_PREFIX`] is removed from `raw_input`, the rest is trimmed and
/// evaluated. Text without the prefix is only trimmed. Any other intent is
/// answered by the first matching knowledge base entry, or [`NO_ANSWER`].
pub fn resolve(intent: &str, knowledge: &KnowledgeBase, raw_input: &str) -> String {
    if intent == MATH_INTENT {
        let expression = raw_input.replace(MATH_PREFIX, "");
        return math::evaluate(expression.trim());
    }

    knowledge
        .answer_for(intent)
        .map_or_else(|| NO_ANSWER.to_string(), str::to_string)
}
