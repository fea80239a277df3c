//! # Parley
//!
//! A small command-line chatbot. Free-text input is sorted into one of a
//! fixed set of intents by a linear text classifier trained at startup, then
//! answered from a static JSON knowledge base. Inputs classified as `math`
//! are evaluated as `operand operator operand` expressions instead.
//!
//! ## Features
//!
//! - Regex tokenization and lowercasing pipeline
//! - TF-IDF features with a seeded, deterministic linear SVM
//! - JSON knowledge base with symmetric load/save
//! - Interactive session loop and one-shot CLI commands

pub mod analysis;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod math;
pub mod ml;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
