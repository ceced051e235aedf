// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Severity model and the violation log sink.
//!
//! The print threshold and the overall error flag are independent: an error
//! event always sets the flag, whether or not its line is printed.

use std::fmt;
use std::io::{self, Write};

/// Severity of a reported event.
///
/// Ordered from most to least severe, so `Error < Warning < Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Numeric level used for threshold comparison (lower = more severe).
    fn level(self) -> i32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        };
        f.write_str(s)
    }
}

/// Threshold-filtered log sink with an accumulating error flag.
///
/// Events print as `<Severity>: commit <short-hash>: <text>`. The default
/// threshold prints errors and warnings; each step of verbosity admits one
/// more severity (or, negative, suppresses one), without affecting the flag.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    sink: W,
    threshold: i32,
    has_error: bool,
}

impl Reporter<io::Stdout> {
    /// Create a reporter printing to stdout.
    pub fn stdout(verbosity: i32) -> Self {
        Self::new(io::stdout(), verbosity)
    }
}

impl<W: Write> Reporter<W> {
    /// Create a reporter over an arbitrary sink.
    ///
    /// `verbosity` shifts the print threshold: 0 prints errors and warnings,
    /// 1 adds info, -1 leaves only errors, -2 prints nothing.
    pub fn new(sink: W, verbosity: i32) -> Self {
        Self {
            sink,
            threshold: Severity::Warning.level() + verbosity,
            has_error: false,
        }
    }

    /// Record an event for the given commit.
    pub fn log(&mut self, severity: Severity, sha: &str, text: &str) {
        if severity == Severity::Error {
            self.has_error = true;
        }
        if severity.level() > self.threshold {
            return;
        }
        let short = &sha[..9.min(sha.len())];
        let _ = writeln!(self.sink, "{}: commit {}: {}", severity, short, text);
    }

    /// Whether any error-severity event has been recorded.
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Consume the reporter and return the sink (used by tests).
    pub fn into_sink(self) -> W {
        self.sink
    }
}
