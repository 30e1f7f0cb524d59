//! Everything the commands print on stdout goes through [`OutputManager`].
//!
//! Errors are not printed here; `main` renders them on stderr.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Done,
    Note,
    Warn,
}

impl Status {
    fn symbol(self) -> char {
        match self {
            Self::Done => '\u{2713}', // ✓
            Self::Note => '\u{2139}', // ℹ
            Self::Warn => '\u{26a0}', // ⚠
        }
    }
}

/// A status line, coloured or not.
fn decorate(status: Status, msg: &str, color: bool) -> String {
    let symbol = status.symbol();
    if !color {
        return format!("{symbol} {msg}");
    }
    match status {
        Status::Done => format!("{} {}", symbol.green().bold(), msg.green()),
        Status::Note => format!("{} {}", symbol.blue().bold(), msg),
        Status::Warn => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            chosen => chosen,
        };
        let color = format == OutputFormat::Human && !args.no_color && !config.output.no_color;

        Self {
            format,
            quiet: args.quiet,
            color,
            term: Term::stdout(),
        }
    }

    fn emit(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(line)
    }

    /// Unadorned line.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(msg)
    }

    /// `✓ msg`, for files written and commands completed.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(&decorate(Status::Done, msg, self.color))
    }

    /// `ℹ msg`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(&decorate(Status::Note, msg, self.color))
    }

    /// `⚠ msg`, for non-fatal diagnostics such as unresolved placeholders.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(&decorate(Status::Warn, msg, self.color))
    }

    /// Section title.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.color {
            self.emit(&text.cyan().bold().to_string())
        } else {
            self.emit(text)
        }
    }

    /// Pretty-printed JSON. Written even with `--quiet`: a caller that asked
    /// for JSON is parsing stdout.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
