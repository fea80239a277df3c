//! Command implementations for the Parley CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;

use crate::chat::{ChatContext, ChatSession};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ParleyConfig;
use crate::error::ParleyError;
use crate::knowledge::{self, KnowledgeBase, QaEntry};

/// Execute a CLI command against the process's stdin and stdout.
pub fn execute_command(args: ParleyArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_command_with_io(args, stdin.lock(), stdout.lock())
}

/// Execute a CLI command with explicit input and output streams.
pub fn execute_command_with_io<R: BufRead, W: Write>(
    args: ParleyArgs,
    input: R,
    mut output: W,
) -> Result<()> {
    let config = args.to_config();
    config.validate()?;

    match args.command() {
        Command::Chat => chat(&config, input, output),
        Command::Ask(ask_args) => ask(ask_args, &config, &args, &mut output),
        Command::Intents => list_intents(&config, &args, &mut output),
        Command::Add(add_args) => add_entry(add_args, &config, &args, &mut output),
    }
}

/// Run the interactive loop.
fn chat<R: BufRead, W: Write>(config: &ParleyConfig, input: R, output: W) -> Result<()> {
    let context = build_context(config)?;
    let mut session = ChatSession::new(&context, config.session.clone());
    session.run(input, output)?;
    Ok(())
}

/// Answer a single question.
fn ask<W: Write>(args: AskArgs, config: &ParleyConfig, cli_args: &ParleyArgs, out: &mut W) -> Result<()> {
    let context = build_context(config)?;
    let reply = context.respond(&args.text)?;

    output_result(
        "Question answered",
        &AskResult {
            input: args.text,
            intent: reply.intent,
            answer: reply.answer,
        },
        cli_args,
        out,
    )?;

    Ok(())
}

/// List the intents in the knowledge base with their question counts.
fn list_intents<W: Write>(config: &ParleyConfig, cli_args: &ParleyArgs, out: &mut W) -> Result<()> {
    let knowledge = load_knowledge(&config.knowledge_path)?;

    let intents = knowledge
        .intent_counts()
        .into_iter()
        .map(|(intent, questions)| IntentCount {
            intent: intent.to_string(),
            questions,
        })
        .collect();

    output_result(
        "Knowledge base intents",
        &IntentListResult {
            path: config.knowledge_path.display().to_string(),
            total_entries: knowledge.len(),
            intents,
        },
        cli_args,
        out,
    )?;

    Ok(())
}

/// Append an entry and save the knowledge base. A missing file is created.
fn add_entry<W: Write>(
    args: AddArgs,
    config: &ParleyConfig,
    cli_args: &ParleyArgs,
    out: &mut W,
) -> Result<()> {
    if args.question.trim().is_empty() {
        bail!("question must not be empty");
    }
    if args.intent.trim().is_empty() {
        bail!("intent must not be empty");
    }

    let path = &config.knowledge_path;
    let mut knowledge = match knowledge::load(path) {
        Ok(knowledge) => knowledge,
        Err(ParleyError::NotFound(_)) => {
            info!("Creating new knowledge base at {}", path.display());
            KnowledgeBase::default()
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to load knowledge base from {}", path.display()));
        }
    };

    let intent = args.intent.clone();
    knowledge.add_entry(QaEntry::new(args.question, args.intent, args.answer));
    knowledge::save(path, &knowledge)
        .with_context(|| format!("failed to save knowledge base to {}", path.display()))?;

    output_result(
        "Entry added",
        &EntryAdditionResult {
            path: path.display().to_string(),
            intent,
            total_entries: knowledge.len(),
        },
        cli_args,
        out,
    )?;

    Ok(())
}

fn load_knowledge(path: &Path) -> Result<KnowledgeBase> {
    knowledge::load(path)
        .with_context(|| format!("failed to load knowledge base from {}", path.display()))
}

/// Load the knowledge base and train the classifier on it.
fn build_context(config: &ParleyConfig) -> Result<ChatContext> {
    let knowledge = load_knowledge(&config.knowledge_path)?;
    ChatContext::train(knowledge, &config.classifier).context("failed to train intent classifier")
}
