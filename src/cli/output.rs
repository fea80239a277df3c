//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ParleyArgs};
use crate::error::Result;

/// Results that know how to print themselves for people.
pub trait HumanOutput {
    /// Write the human-readable form.
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Result of answering one question.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResult {
    pub input: String,
    pub intent: String,
    pub answer: String,
}

impl HumanOutput for AskResult {
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Intent: {}", self.intent)?;
        writeln!(out, "Answer: {}", self.answer)
    }
}

/// Question count for one intent.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentCount {
    pub intent: String,
    pub questions: usize,
}

/// Intents found in a knowledge base.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentListResult {
    pub path: String,
    pub total_entries: usize,
    pub intents: Vec<IntentCount>,
}

impl HumanOutput for IntentListResult {
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Intents in {}:", self.path)?;
        writeln!(out, "════════════")?;
        let width = self
            .intents
            .iter()
            .map(|i| i.intent.chars().count())
            .max()
            .unwrap_or(0);
        for intent in &self.intents {
            writeln!(
                out,
                "{:<width$}  {} question(s)",
                intent.intent,
                intent.questions,
                width = width
            )?;
        }
        writeln!(out)?;
        writeln!(out, "Total entries: {}", self.total_entries)
    }
}

/// Result of appending an entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryAdditionResult {
    pub path: String,
    pub intent: String,
    pub total_entries: usize,
}

impl HumanOutput for EntryAdditionResult {
    fn write_human(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "Added entry for intent '{}' to {} ({} entries)",
            self.intent, self.path, self.total_entries
        )
    }
}

/// Output a result in the specified format.
pub fn output_result<T, W>(message: &str, result: &T, args: &ParleyArgs, out: &mut W) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args, out),
        OutputFormat::Json => output_json(result, args, out),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput, W: Write>(
    message: &str,
    result: &T,
    args: &ParleyArgs,
    out: &mut W,
) -> Result<()> {
    if args.verbosity() > 1 {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }
    result.write_human(out)?;
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(result: &T, args: &ParleyArgs, out: &mut W) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}
