//! Standard analyzer used by the intent classifier.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer (words of at least two word characters)
//! 2. LowercaseFilter
//!
//! No stop words are removed: short function words like "what" and "is"
//! carry useful signal when telling a math question from a greeting.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// A standard analyzer: regex word tokenizer plus lowercasing.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard");

        Ok(StandardAnalyzer { inner: analyzer })
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new().expect("Standard analyzer should be creatable with default settings")
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer
            .analyze("What is the WEATHER like?")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].text, "what");
        assert_eq!(tokens[1].text, "is");
        assert_eq!(tokens[2].text, "the");
        assert_eq!(tokens[3].text, "weather");
        assert_eq!(tokens[4].text, "like");
    }

    #[test]
    fn test_arithmetic_leaves_only_multi_digit_numbers() {
        let analyzer = StandardAnalyzer::new().unwrap();
        let tokens: Vec<String> = analyzer
            .analyze("What is 12 * 3")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(tokens, vec!["what", "is", "12"]);
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(StandardAnalyzer::new().unwrap().name(), "standard");
    }
}
