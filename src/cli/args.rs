//! Command line argument parsing for the Parley CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_KNOWLEDGE_PATH, ParleyConfig};

/// Parley - a small intent-classifying chatbot
#[derive(Parser, Debug, Clone)]
#[command(name = "parley")]
#[command(about = "A small intent-classifying chatbot backed by a JSON knowledge base")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ParleyArgs {
    /// Knowledge base file (JSON)
    #[arg(
        short = 'k',
        long = "knowledge",
        env = "PARLEY_KNOWLEDGE",
        value_name = "FILE",
        default_value = DEFAULT_KNOWLEDGE_PATH
    )]
    pub knowledge: PathBuf,

    /// Seed for the classifier's sample visiting order
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format for non-interactive commands
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute (defaults to `chat`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl ParleyArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// The subcommand to run, `chat` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }

    /// Build the run configuration from the arguments.
    pub fn to_config(&self) -> ParleyConfig {
        let mut config = ParleyConfig {
            knowledge_path: self.knowledge.clone(),
            ..Default::default()
        };
        config.classifier.seed = self.seed;
        config
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Chat interactively until `quit` or end of input
    Chat,

    /// Answer a single question and show the predicted intent
    Ask(AskArgs),

    /// List the intents in the knowledge base
    Intents,

    /// Append a question/intent/answer entry to the knowledge base
    Add(AddArgs),
}

/// Arguments for a single question
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct AskArgs {
    /// The question to answer
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for adding an entry
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    /// Training utterance
    #[arg(long)]
    pub question: String,

    /// Intent label
    #[arg(long)]
    pub intent: String,

    /// Reply for the intent
    #[arg(long, default_value = "")]
    pub answer: String,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
