//! Interactive input
//!
//! Abstracts blocking console prompts behind a trait so the selection
//! and confirmation flows can be driven by scripted input in tests.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Source of operator input for interactive prompts.
pub trait Prompt {
    /// Print the prompt and read one line of input, trimmed.
    fn read_line(&mut self, msg: &str) -> Result<String>;

    /// Print the prompt and read a line without echoing it.
    fn read_password(&mut self, msg: &str) -> Result<String>;
}

/// Prompt backed by stdin/stdout.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn read_line(&mut self, msg: &str) -> Result<String> {
        print!("{msg}");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        Ok(line.trim().to_string())
    }

    fn read_password(&mut self, msg: &str) -> Result<String> {
        rpassword::prompt_password(msg).context("Failed to read password")
    }
}

/// Prompt that replays a fixed sequence of answers.
///
/// Each `read_line`/`read_password` call consumes the next queued
/// answer; running out of answers is an error.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    fn next(&mut self, msg: &str) -> Result<String> {
        self.answers
            .pop_front()
            .with_context(|| format!("No scripted answer left for prompt: {msg}"))
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, msg: &str) -> Result<String> {
        Ok(self.next(msg)?.trim().to_string())
    }

    fn read_password(&mut self, msg: &str) -> Result<String> {
        self.next(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_replays_in_order() {
        let mut prompt = ScriptedPrompt::new(["first", "second"]);
        assert_eq!(prompt.read_line("> ").unwrap(), "first");
        assert_eq!(prompt.read_line("> ").unwrap(), "second");
        assert!(prompt.read_line("> ").is_err());
    }

    #[test]
    fn test_scripted_prompt_trims_lines() {
        let mut prompt = ScriptedPrompt::new(["  spaced  "]);
        assert_eq!(prompt.read_line("> ").unwrap(), "spaced");
    }

    #[test]
    fn test_scripted_password_not_trimmed() {
        let mut prompt = ScriptedPrompt::new([" p4ss "]);
        assert_eq!(prompt.read_password("pw: ").unwrap(), " p4ss ");
    }
}
