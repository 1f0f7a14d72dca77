//! Line-oriented terminal used by the navigator and every operation
//!
//! A [`Console`] pairs a `BufRead` with a `Write`. On a real terminal the prompts go
//! through `dialoguer`; otherwise plain lines are read so sessions can be scripted.

use anyhow::{Context, Result};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use dialoguer::{Confirm, Input};
use is_terminal::IsTerminal;
use std::io::{self, BufRead, BufReader, Cursor, Write};
use std::sync::{Arc, Mutex};

pub struct Console {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
    interactive: bool,
}

impl Console {
    /// Console over arbitrary streams, always line based
    pub fn new(input: Box<dyn BufRead + Send>, output: Box<dyn Write + Send>) -> Self {
        Self {
            input,
            output,
            interactive: false,
        }
    }

    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
        if !io::stdout().is_terminal() {
            colored::control::set_override(false);
        }
        log::debug!("Console attached to stdio (interactive: {})", interactive);

        Self {
            input: Box::new(BufReader::new(io::stdin())),
            output: Box::new(io::stdout()),
            interactive,
        }
    }

    /// Console fed from a fixed script, with everything written captured in the transcript
    pub fn scripted(script: &str) -> (Self, Transcript) {
        let transcript = Transcript::default();
        let console = Self::new(
            Box::new(Cursor::new(script.as_bytes().to_vec())),
            Box::new(transcript.clone()),
        );
        (console, transcript)
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Read one line without its line terminator; `None` once input is exhausted
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Ask for a line of text; empty answers are allowed
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        if self.interactive {
            self.output.flush()?;
            let answer = Input::<String>::new()
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()
                .with_context(|| format!("Failed to read answer for '{}'", label))?;
            return Ok(answer);
        }

        write!(self.output, "{} ", label)?;
        self.output.flush()?;
        self.read_line()?
            .with_context(|| format!("Input closed while waiting for '{}'", label))
    }

    /// Yes/no question defaulting to "no"
    pub fn confirm(&mut self, label: &str) -> Result<bool> {
        if self.interactive {
            self.output.flush()?;
            let answer = Confirm::new()
                .with_prompt(label)
                .default(false)
                .interact()
                .with_context(|| format!("Failed to read answer for '{}'", label))?;
            return Ok(answer);
        }

        let answer = self.prompt(&format!("{} y/N", label))?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// Human-readable warning, e.g. for a rejected selection
    pub fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\n{}", message.yellow())?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
            .context("Failed to clear the terminal")?;
        Ok(())
    }
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

/// Shared in-memory sink capturing console output
#[derive(Debug, Clone, Default)]
pub struct Transcript(Arc<Mutex<Vec<u8>>>);

impl Transcript {
    pub fn contents(&self) -> String {
        match self.0.lock() {
            Ok(buffer) => String::from_utf8_lossy(&buffer).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        }
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self
            .0
            .lock()
            .map_err(|_| io::Error::other("transcript lock poisoned"))?;
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
