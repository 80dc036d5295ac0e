//! Interactive shell for the Points Trie.
//!
//! The shell reads one command per line, applies it to a [`LetterTrie`] and writes
//! results and error messages to its output. It is generic over its input and
//! output so it can be driven by stdin/stdout or by in-memory buffers.
//!
//! # Example
//!
//! ```
//! use points_trie_lib::config::PointsConfig;
//! use points_trie_lib::shell::Shell;
//!
//! let input = "add ab 3\nadd ac 5\ntrie\nquit\n".as_bytes();
//! let mut output = Vec::new();
//! Shell::new(input, &mut output, &PointsConfig::default()).run().unwrap();
//!
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("+(a(b[3]c[5]))"));
//! ```

pub mod command;

use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::debug;

use crate::config::{PointsConfig, ShellConfig};
use crate::data_structures::letter_trie::LetterTrie;
use crate::error::shell::{ShellError, ShellResult};
use crate::error::{ErrorContext, ErrorReporter, TracingErrorReporter};

pub use command::{Command, CommandKind, HELP_MESSAGE};

/// What the shell loop does after a line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Leave the loop
    Quit,
}

/// Read-eval-print loop over a [`LetterTrie`].
#[derive(Debug)]
pub struct Shell<R, W> {
    input: R,
    output: W,
    trie: LetterTrie,
    config: ShellConfig,
    reporter: Arc<dyn ErrorReporter>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with an empty trie configured from `config`.
    ///
    /// # Arguments
    ///
    /// * `input` - Source of command lines
    /// * `output` - Sink for prompts, results and error messages
    /// * `config` - Trie and shell settings
    pub fn new(input: R, output: W, config: &PointsConfig) -> Self {
        Self {
            input,
            output,
            trie: LetterTrie::with_config(config.trie.clone()),
            config: config.shell.clone(),
            reporter: Arc::new(TracingErrorReporter::new()),
        }
    }

    /// Replaces the reporter that receives unexpected engine errors.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// The trie the shell is working on.
    pub fn trie(&self) -> &LetterTrie {
        &self.trie
    }

    /// Runs the loop until `quit` or the end of input.
    ///
    /// User mistakes are printed and the loop continues. Only I/O failures end the
    /// loop with an error.
    pub fn run(&mut self) -> ShellResult<()> {
        let mut buffer = Vec::new();
        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            buffer.clear();
            if self.input.read_until(b'\n', &mut buffer)? == 0 {
                debug!("end of input");
                writeln!(self.output)?;
                return Ok(());
            }

            // Undecodable bytes become U+FFFD and fail line validation
            let line = String::from_utf8_lossy(&buffer);
            let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
            match self.handle_line(trimmed) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(ShellError::Io(err)) => return Err(ShellError::Io(err)),
                Err(err) => {
                    if let ShellError::Trie(trie_err) = &err {
                        self.reporter.report(
                            ErrorContext::new(trie_err.clone(), "shell").with_details(trimmed),
                        );
                    }
                    debug!(line = trimmed, error = %err, "rejected shell input");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Parses and executes a single line.
    pub fn handle_line(&mut self, line: &str) -> ShellResult<Flow> {
        let command = command::parse(line)?;
        self.execute(command)
    }

    /// Executes a parsed command against the trie.
    pub fn execute(&mut self, command: Command) -> ShellResult<Flow> {
        debug!(?command, "executing shell command");
        match command {
            Command::New => {
                self.trie = LetterTrie::with_config(self.trie.config().clone());
            }
            Command::Add { name, points } => {
                if !self.trie.add(&name, points)? {
                    return Err(ShellError::AlreadyAllocated(name));
                }
            }
            Command::Change { name, points } => {
                if !self.trie.change(&name, points)? {
                    return Err(ShellError::NotFound(name));
                }
            }
            Command::Delete { name } => {
                if !self.trie.delete(&name)? {
                    return Err(ShellError::NotFound(name));
                }
            }
            Command::Points { name } => match self.trie.points(&name)? {
                Some(points) => writeln!(self.output, "{points}")?,
                None => return Err(ShellError::NoPointsFor(name)),
            },
            Command::Trie => writeln!(self.output, "{}", self.trie)?,
            Command::Help => writeln!(self.output, "{HELP_MESSAGE}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
