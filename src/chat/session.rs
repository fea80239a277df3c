//! Interactive read-classify-answer loop.
//!
//! The session is a two-state machine. While [`SessionState::Running`] it
//! prompts, reads one line and answers it. The quit command or end of input
//! moves it to [`SessionState::Terminated`], which is final.

use std::io::{BufRead, Write};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::chat::context::ChatContext;
use crate::error::Result;

/// Labels and sentinel used by a chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Written before each line is read.
    pub prompt: String,
    /// Prefix of every reply.
    pub bot_label: String,
    /// Input that ends the session, compared case-insensitively.
    pub quit_command: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "You: ".to_string(),
            bot_label: "Bot: ".to_string(),
            quit_command: "quit".to_string(),
        }
    }
}

/// State of a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// A chat session over a trained [`ChatContext`].
#[derive(Debug)]
pub struct ChatSession<'a> {
    context: &'a ChatContext,
    config: SessionConfig,
    state: SessionState,
    turns: usize,
}

impl<'a> ChatSession<'a> {
    /// Create a running session.
    pub fn new(context: &'a ChatContext, config: SessionConfig) -> Self {
        Self {
            context,
            config,
            state: SessionState::Running,
            turns: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of inputs answered so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Run until the quit command or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        info!("Chat session started");
        while self.state == SessionState::Running {
            self.step(&mut input, &mut output)?;
        }
        output.flush()?;
        info!("Chat session ended after {} turns", self.turns);
        Ok(())
    }

    /// Perform one prompt/read/answer cycle and return the resulting state.
    ///
    /// Does nothing once the session is terminated.
    pub fn step<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<SessionState> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        write!(output, "{}", self.config.prompt)?;
        output.flush()?;

        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            debug!("End of input");
            writeln!(output)?;
            self.state = SessionState::Terminated;
            return Ok(self.state);
        }

        let line = strip_line_ending(&buffer);
        if line.to_lowercase() == self.config.quit_command.to_lowercase() {
            self.state = SessionState::Terminated;
            return Ok(self.state);
        }

        let reply = self.context.respond(line)?;
        writeln!(output, "{}{}", self.config.bot_label, reply.answer)?;
        self.turns += 1;

        Ok(self.state)
    }
}

/// Remove a single trailing `\n` or `\r\n`, leaving other whitespace alone.
fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(stripped) => stripped.strip_suffix('\r').unwrap_or(stripped),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::knowledge::{KnowledgeBase, QaEntry};
    use crate::ml::intent_classifier::IntentClassifier;

    struct FixedClassifier(&'static str);

    impl IntentClassifier for FixedClassifier {
        fn predict(&self, _text: &str) -> Result<String> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn context(intent: &'static str) -> ChatContext {
        let knowledge = KnowledgeBase::new(vec![QaEntry::new("Hello", "greeting", "Hi there!")]);
        ChatContext::new(knowledge, Box::new(FixedClassifier(intent)))
    }

    fn run(context: &ChatContext, input: &str) -> (String, usize) {
        let mut output = Vec::new();
        let mut session = ChatSession::new(context, SessionConfig::default());
        session.run(Cursor::new(input), &mut output).unwrap();
        assert_eq!(session.state(), SessionState::Terminated);
        (String::from_utf8(output).unwrap(), session.turns())
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("quit\n"), "quit");
        assert_eq!(strip_line_ending("quit\r\n"), "quit");
        assert_eq!(strip_line_ending(" quit \n"), " quit ");
        assert_eq!(strip_line_ending("quit"), "quit");
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let context = context("greeting");
        assert_eq!(run(&context, "QuIt\n"), ("You: ".to_string(), 0));
    }

    #[test]
    fn test_quit_with_spaces_is_a_question() {
        let context = context("greeting");
        let (output, turns) = run(&context, " quit\nquit\n");
        assert_eq!(output, "You: Bot: Hi there!\nYou: ");
        assert_eq!(turns, 1);
    }

    #[test]
    fn test_end_of_input_terminates() {
        let context = context("greeting");
        let (output, turns) = run(&context, "hello\n");
        assert_eq!(output, "You: Bot: Hi there!\nYou: \n");
        assert_eq!(turns, 1);
    }

    #[test]
    fn test_step_after_termination_is_noop() {
        let context = context("greeting");
        let mut session = ChatSession::new(&context, SessionConfig::default());
        let mut input = Cursor::new("quit\nhello\n");
        let mut output = Vec::new();

        assert_eq!(
            session.step(&mut input, &mut output).unwrap(),
            SessionState::Terminated
        );
        assert_eq!(
            session.step(&mut input, &mut output).unwrap(),
            SessionState::Terminated
        );
        assert_eq!(output, b"You: ");
    }

    #[test]
    fn test_custom_labels() {
        let context = context("math");
        let config = SessionConfig {
            prompt: "> ".to_string(),
            bot_label: "Parley: ".to_string(),
            quit_command: "exit".to_string(),
        };
        let mut session = ChatSession::new(&context, config);
        let mut output = Vec::new();
        session
            .run(Cursor::new("What is 2 * 21\nEXIT\n"), &mut output)
            .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "> Parley: 42\n> ");
    }
}
