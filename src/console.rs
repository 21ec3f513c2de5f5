// Console abstraction used by the UI flows. Every prompt yields a single
// whitespace-delimited token; output is line oriented.

use anyhow::Result;
use dialoguer::Input;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Standard input reached end of file.
    #[error("input closed")]
    Closed,
}

/// Reads answers to prompts and prints messages.
pub trait Console {
    /// Show `prompt` and return the first token of the answer, or an empty
    /// string when the answer is blank.
    fn read_token(&mut self, prompt: &str) -> Result<String>;

    fn say(&mut self, line: &str) -> Result<()>;
}

fn first_token(line: &str) -> String {
    line.split_whitespace().next().unwrap_or_default().to_string()
}

/// Interactive terminal console built on `dialoguer`.
#[derive(Default)]
pub struct TermConsole;

impl TermConsole {
    pub fn new() -> Self {
        TermConsole
    }
}

impl Console for TermConsole {
    fn read_token(&mut self, prompt: &str) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(first_token(&answer))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }
}

/// Line-based console over any reader/writer pair. Used when stdin is not a
/// terminal and in tests.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        LineConsole { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        LineConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_token(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;
        // Undecodable bytes become U+FFFD and fail validation downstream.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(ConsoleError::Closed.into());
        }
        Ok(first_token(&String::from_utf8_lossy(&line)))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
