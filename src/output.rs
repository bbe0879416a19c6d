//! Terminal output for the tailords CLI.
//!
//! Status lines are Cargo-style: a right-aligned verb, then the message. They
//! go to stderr so stdout stays clean for `--json` and token tables.

use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::types::Colour;
use crate::validation::Severity;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const VERB_WIDTH: usize = 12;

/// Colour of a status verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Work in progress or finished: green.
    Progress,
    /// Something read or looked up: cyan.
    Note,
    /// Finished, but with warnings: yellow.
    Caution,
    /// Rejected options: red.
    Failure,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[32m",
            Tone::Note => "\x1b[36m",
            Tone::Caution => "\x1b[33m",
            Tone::Failure => "\x1b[31m",
        }
    }
}

impl From<Severity> for Tone {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => Tone::Caution,
            Severity::Error => Tone::Failure,
        }
    }
}

/// Status printer; escape codes only when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// `  Generating 9 shades of #3b82f6 (AA)`
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn success(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Note, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Caution, verb, message);
    }

    /// Write one status line to stderr.
    pub fn emit(&self, tone: Tone, verb: &str, message: &str) {
        let line = self.status_line(tone, verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }

    /// The text [`Printer::emit`] writes, without the newline.
    pub fn status_line(&self, tone: Tone, verb: &str, message: &str) -> String {
        let verb = format!("{verb:>VERB_WIDTH$}");
        format!("{} {message}", self.paint(&[BOLD, tone.ansi()], &verb))
    }

    /// Diagnostic code or other secondary text.
    pub fn dim(&self, text: &str) -> String {
        self.paint(&[DIM], text)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(&[Tone::Note.ansi()], text)
    }

    /// `error` or `warning`, bold in the severity's tone.
    pub fn severity(&self, severity: Severity) -> String {
        self.paint(&[BOLD, Tone::from(severity).ansi()], &severity.to_string())
    }

    /// A four-cell truecolour block followed by a space; empty when plain.
    pub fn swatch(&self, colour: Colour) -> String {
        if !self.color {
            return String::new();
        }
        let [r, g, b] = colour.to_rgb();
        format!("\x1b[48;2;{r};{g};{b}m    {RESET} ")
    }

    fn paint(&self, codes: &[&str], text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let mut out = codes.concat();
        let _ = write!(out, "{text}{RESET}");
        out
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `plural(1, "shade")` is "1 shade"; any other count adds an "s".
pub fn plural(n: usize, noun: &str) -> String {
    let suffix = if n == 1 { "" } else { "s" };
    format!("{n} {noun}{suffix}")
}

/// `path` relative to the working directory when it lies inside it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));
    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
