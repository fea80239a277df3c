//! Tokenizers split raw text into tokens.
//!
//! Tokenizers are the first step in the analysis pipeline. Parley ships a
//! single regex-based implementation, [`regex::RegexTokenizer`].

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use parley::analysis::token::{Token, TokenStream};
/// use parley::analysis::tokenizer::Tokenizer;
/// use parley::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .map(|s| Token::new(s.trim()))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
