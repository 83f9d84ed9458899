//! Console plumbing shared by both demos: flags, tracing setup and a
//! line-buffered token reader that recovers from malformed input.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Args;
use tracing_subscriber::EnvFilter;

use crate::application::AppError;

mod game;
mod style;
mod teller;

pub use game::*;
pub use style::Palette;
pub use teller::*;

/// Flags understood by both binaries. Running without any reproduces the
/// plain interactive behavior.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Colors are used only when stdout is a terminal and not disabled.
    pub fn palette(&self) -> Palette {
        Palette::new(!self.no_color && io::stdout().is_terminal())
    }

    /// Route tracing to stderr so stdout stays reserved for the game or menu.
    /// `--verbose` wins over `RUST_LOG`; otherwise only warnings are shown.
    pub fn init_tracing(&self) {
        let filter = if self.verbose {
            EnvFilter::new("parlor=debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        // A subscriber may already be installed (e.g. by a test harness).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Outcome of reading one value from the console.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<T> {
    Value(T),
    /// The token did not parse; the rest of its line has been discarded.
    Malformed(AppError),
    /// End of input.
    Closed,
}

/// Whitespace-separated tokens read from `R`, prompts and messages written to `W`.
///
/// Tokens are consumed one at a time, so several values typed on one line are
/// used by consecutive reads. A token that fails to parse throws away the
/// remainder of its line.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
    palette: Palette,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, palette: Palette) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
            palette,
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.writer, "{}", text).context("Failed to write to output")
    }

    pub fn blank(&mut self) -> Result<()> {
        self.say("")
    }

    /// Write `text` without a newline and flush, so it is visible before the read blocks.
    pub fn prompt(&mut self, text: impl Display) -> Result<()> {
        write!(self.writer, "{}", text).context("Failed to write to output")?;
        self.writer.flush().context("Failed to flush output")
    }

    pub fn report(&mut self, err: &AppError) -> Result<()> {
        let message = self.palette.error(err);
        self.say(message)
    }

    /// Read the next token and parse it with `parse`.
    pub fn read_value<T>(
        &mut self,
        expected: &'static str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Input<T>> {
        let Some(token) = self.next_token()? else {
            return Ok(Input::Closed);
        };

        match parse(&token) {
            Some(value) => Ok(Input::Value(value)),
            None => {
                self.pending.clear();
                Ok(Input::Malformed(AppError::MalformedInput {
                    input: token,
                    expected,
                }))
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            let read = self
                .reader
                .read_until(b'\n', &mut line)
                .context("Failed to read input")?;
            if read == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&line);
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Parse an integer token, the way both menus and moves are entered.
pub fn parse_integer(token: &str) -> Option<i64> {
    token.parse().ok()
}
