//! Text analysis for Parley.
//!
//! Turns raw utterances into normalized terms before they reach the TF-IDF
//! vectorizer: a tokenizer splits the text, then a chain of token filters
//! rewrites each token.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
