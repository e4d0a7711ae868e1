//! Notification sink for human-readable progress lines.
//!
//! The controller reports every step through a [`StatusSink`]. The console
//! implementation prints prefixed lines (`[INFO]`, `[OK]`, `[WARN]`,
//! `[ERROR]`); structured logs go through `tracing` separately.

use std::io::{self, Stderr, Stdout, Write};

const BANNER: &str = "==============================================";
const SEPARATOR: &str = "----------------------------------------------";

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    /// Fixed-width prefix printed in front of the message.
    pub fn prefix(self) -> &'static str {
        match self {
            StatusLevel::Info => "[INFO]  ",
            StatusLevel::Success => "[OK]    ",
            StatusLevel::Warning => "[WARN]  ",
            StatusLevel::Error => "[ERROR] ",
        }
    }
}

/// Formats one status line without a trailing newline.
pub fn format_status(level: StatusLevel, message: &str) -> String {
    format!("{}{}", level.prefix(), message)
}

/// Receiver for progress and error messages.
///
/// Only [`status`](StatusSink::status) is required; the decorative hooks
/// default to doing nothing.
pub trait StatusSink {
    fn status(&mut self, level: StatusLevel, message: &str);

    fn info(&mut self, message: &str) {
        self.status(StatusLevel::Info, message);
    }

    fn success(&mut self, message: &str) {
        self.status(StatusLevel::Success, message);
    }

    fn warn(&mut self, message: &str) {
        self.status(StatusLevel::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.status(StatusLevel::Error, message);
    }

    fn welcome(&mut self) {}

    fn separator(&mut self) {}

    /// Echo of the text as read.
    fn original_text(&mut self, _text: &str) {}

    /// Echo of the text as normalized.
    fn normalized_text(&mut self, _text: &str) {}

    fn done(&mut self) {}
}

/// Prints status lines to a pair of writers: errors to `err`, everything
/// else to `out`.
///
/// A failed console write is ignored; status output never aborts a run.
#[derive(Debug)]
pub struct ConsoleSink<O = Stdout, E = Stderr> {
    out: O,
    err: E,
    echo_text: bool,
}

impl ConsoleSink<Stdout, Stderr> {
    /// Console sink on the process's stdout and stderr.
    pub fn stdio(echo_text: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), echo_text)
    }
}

impl<O: Write, E: Write> ConsoleSink<O, E> {
    pub fn new(out: O, err: E, echo_text: bool) -> Self {
        Self {
            out,
            err,
            echo_text,
        }
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    fn echo(&mut self, heading: &str, text: &str) {
        if self.echo_text {
            self.line("");
            self.line(heading);
            self.line(text);
        }
    }
}

impl<O: Write, E: Write> StatusSink for ConsoleSink<O, E> {
    fn status(&mut self, level: StatusLevel, message: &str) {
        let line = format_status(level, message);
        match level {
            StatusLevel::Error => {
                let _ = writeln!(self.err, "{line}");
            }
            _ => self.line(&line),
        }
    }

    fn welcome(&mut self) {
        self.line(BANNER);
        self.line("        TEXT NORMALIZER APPLICATION          ");
        self.line(BANNER);
    }

    fn separator(&mut self) {
        self.line(SEPARATOR);
    }

    fn original_text(&mut self, text: &str) {
        self.echo("--- Original Text ---", text);
    }

    fn normalized_text(&mut self, text: &str) {
        self.echo("--- Normalized Text ---", text);
    }

    fn done(&mut self) {
        self.line("");
        self.line(BANNER);
        self.line("              PROCESS COMPLETED              ");
        self.line(BANNER);
    }
}
