//! Output formatting for the CLI.
//!
//! Listings and status go to stdout, problems to stderr. In JSON mode only
//! `json` payloads and errors are printed.

use console::{style, StyledObject, Term};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stderr(),
        }
    }

    fn emit(&self, stream: Stream, text: impl std::fmt::Display) {
        if self.json {
            return;
        }
        match stream {
            Stream::Stdout => println!("{}", text),
            Stream::Stderr => eprintln!("{}", text),
        }
    }

    fn marked(&self, stream: Stream, mark: StyledObject<&str>, msg: &str) {
        self.emit(stream, format!("{} {}", mark, msg));
    }

    pub fn info(&self, msg: &str) {
        self.marked(Stream::Stdout, style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.marked(Stream::Stdout, style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        self.marked(Stream::Stderr, style("⚠").yellow(), msg);
    }

    /// Print an error. Still printed in JSON mode, as `{"error": ...}`.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Verbose-only trace of what the CLI is doing.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.emit(Stream::Stderr, format!("{} {}", style("→").dim(), style(msg).dim()));
        }
    }

    pub fn header(&self, msg: &str) {
        self.emit(Stream::Stdout, format!("\n{}", style(msg).bold().underlined()));
    }

    /// Print text as-is.
    pub fn line(&self, msg: &str) {
        self.emit(Stream::Stdout, msg);
    }

    /// Print a pretty JSON payload, regardless of mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!("failed to encode JSON output: {}", e),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        self.emit(Stream::Stdout, format!("  {}: {}", style(key).dim(), value));
    }

    /// Print columns padded to `widths`.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        let row = cols
            .iter()
            .zip(widths)
            .map(|(col, width)| format!("{:width$}", col, width = *width))
            .collect::<Vec<_>>()
            .join("  ");
        self.emit(Stream::Stdout, format!("  {}", row.trim_end()));
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Terminal width, or 80 columns off a tty.
    pub fn term_width(&self) -> usize {
        match self.term.size_checked() {
            Some((_, cols)) if cols > 0 => usize::from(cols),
            _ => 80,
        }
    }
}
