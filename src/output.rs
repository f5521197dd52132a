//! Terminal output for the venn CLI.
//!
//! Cargo-style status lines with a right-aligned verb. Everything goes to
//! stderr; colour is used only when stderr is a terminal.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Width of the right-aligned verb column.
const VERB_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Green,
    Cyan,
    Yellow,
    Red,
    Dim,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Green => "\x1b[32m",
            Tone::Cyan => "\x1b[36m",
            Tone::Yellow => "\x1b[33m",
            Tone::Red => "\x1b[31m",
            Tone::Dim => "\x1b[2m",
        }
    }
}

/// Status printer for progress and diagnostics.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
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

    /// e.g. "   Rendering starter (3 layers)"
    pub fn status(&self, verb: &str, message: &str) {
        self.line(Tone::Green, verb, message);
    }

    pub fn success(&self, verb: &str, message: &str) {
        self.line(Tone::Green, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.line(Tone::Cyan, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(Tone::Yellow, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(Tone::Red, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(Tone::Dim, false, text)
    }

    /// A bold red or yellow severity label.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let tone = if is_error { Tone::Red } else { Tone::Yellow };
        self.paint(tone, true, label)
    }

    fn paint(&self, tone: Tone, bold: bool, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let weight = if bold { BOLD } else { "" };
        format!("{weight}{}{text}{RESET}", tone.code())
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) {
        let verb = format!("{verb:>VERB_WIDTH$}");
        let _ = writeln!(io::stderr().lock(), "{} {message}", self.paint(tone, true, &verb));
    }
}

/// Pluralize a count: `plural(1, "layer", "layers")` → "1 layer".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { pluralized })
}

/// Return a path relative to the working directory when possible.
pub fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(|p| p.display().to_string()))
        .map(|s| if s.is_empty() { ".".to_string() } else { s })
        .unwrap_or_else(|| path.display().to_string())
}
