//! Score prompt abstraction over the console
//!
//! The blocking console read and its two early-exit signals (empty line,
//! cancellation) are modeled as a single "read next score" operation with a
//! tagged outcome, so the collector never deals with terminal specifics.

use crate::error::{Result, ScorebookError};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;

/// Outcome of asking the operator for one score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptOutcome {
    /// A parsed numeric score
    Score(f64),
    /// Operator pressed Enter on an empty line: end the session
    EndOfSession,
    /// Operator sent a cancellation signal (Ctrl-C / Ctrl-D)
    Cancelled,
}

/// Trait for reading the next score from the operator
pub trait ScorePrompt {
    /// Block until the operator supplies a score or ends the session
    fn read_score(&mut self, prompt: &str) -> Result<PromptOutcome>;
}

/// Interpret one raw input line. Empty input ends the session; anything else
/// must parse as a floating-point score.
fn interpret_line(line: &str) -> std::result::Result<PromptOutcome, ScorebookError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(PromptOutcome::EndOfSession);
    }
    trimmed
        .parse::<f64>()
        .map(PromptOutcome::Score)
        .map_err(|_| ScorebookError::InvalidScore {
            input: trimmed.to_string(),
        })
}

/// Console prompt backed by rustyline
pub struct ConsolePrompt {
    editor: DefaultEditor,
}

impl ConsolePrompt {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl ScorePrompt for ConsolePrompt {
    fn read_score(&mut self, prompt: &str) -> Result<PromptOutcome> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => match interpret_line(&line) {
                    Ok(outcome) => return Ok(outcome),
                    // Unparseable input is recoverable: tell the operator
                    // and ask again rather than aborting the session.
                    Err(ScorebookError::InvalidScore { input }) => {
                        println!("'{input}' is not a number, try again.");
                    }
                    Err(e) => return Err(e.into()),
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    return Ok(PromptOutcome::Cancelled);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Scripted prompt for testing: yields a fixed sequence of outcomes and
/// records every prompt string it was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    outcomes: VecDeque<PromptOutcome>,
    prompts_seen: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(outcomes: impl IntoIterator<Item = PromptOutcome>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            prompts_seen: Vec::new(),
        }
    }

    /// Prompt strings shown so far (for testing)
    pub fn prompts_seen(&self) -> &[String] {
        &self.prompts_seen
    }
}

impl ScorePrompt for ScriptedPrompt {
    fn read_score(&mut self, prompt: &str) -> Result<PromptOutcome> {
        self.prompts_seen.push(prompt.to_string());
        // Running out of scripted input behaves like the operator leaving
        Ok(self
            .outcomes
            .pop_front()
            .unwrap_or(PromptOutcome::EndOfSession))
    }
}
