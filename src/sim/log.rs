//! Activity Log.
//!
//! Log entries, the live display they are mirrored to while the engine
//! runs, and the writers that persist the finished buffer. Every output
//! path renders entries through the same `Display` impl, so the monitor
//! and the log file agree byte for byte.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::common::constants::TIMESTAMP_PRECISION;
use crate::common::SimError;

/// One timestamped event in the simulation trace.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LogEntry {
    /// Seconds since the engine started, sampled from a monotonic clock.
    pub elapsed_seconds: f64,
    pub description: String,
}

impl LogEntry {
    pub fn new(elapsed_seconds: f64, description: impl Into<String>) -> Self {
        Self {
            elapsed_seconds,
            description: description.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.prec$} - {}",
            self.elapsed_seconds,
            self.description,
            prec = TIMESTAMP_PRECISION
        )
    }
}

/// Immediate, unbuffered sink for entries as the engine produces them.
pub trait LogDisplay {
    fn show(&mut self, entry: &LogEntry);
}

impl<T: LogDisplay + ?Sized> LogDisplay for &mut T {
    fn show(&mut self, entry: &LogEntry) {
        (**self).show(entry);
    }
}

/// Prints each entry to a stream, stdout unless built with
/// [`ConsoleDisplay::with_writer`].
///
/// A failed write does not stop the run. The first failure is reported as a
/// warning and later ones are dropped silently.
#[derive(Debug)]
pub struct ConsoleDisplay<W: Write = io::Stdout> {
    out: W,
    write_failed: bool,
}

impl ConsoleDisplay {
    /// Creates a display on stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            write_failed: false,
        }
    }

    /// True once any entry failed to reach the stream.
    pub fn write_failed(&self) -> bool {
        self.write_failed
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LogDisplay for ConsoleDisplay<W> {
    fn show(&mut self, entry: &LogEntry) {
        let result = writeln!(self.out, "{entry}").and_then(|()| self.out.flush());
        if let Err(err) = result {
            if !self.write_failed {
                tracing::warn!(error = %err, "log display write failed; further entries may be lost");
            }
            self.write_failed = true;
        }
    }
}

/// Discards every entry.
#[derive(Debug, Default)]
pub struct SilentDisplay;

impl LogDisplay for SilentDisplay {
    fn show(&mut self, _entry: &LogEntry) {}
}

/// Keeps rendered lines in memory.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    pub lines: Vec<String>,
}

impl LogDisplay for MemoryDisplay {
    fn show(&mut self, entry: &LogEntry) {
        self.lines.push(entry.to_string());
    }
}

/// Renders entries the way the live display shows them, one per line.
pub fn render(entries: &[LogEntry], out: &mut impl Write) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{entry}")?;
    }
    out.flush()
}

/// Writes the finished log to `path`, replacing any existing file.
pub fn write_log_file(path: &Path, entries: &[LogEntry]) -> Result<(), SimError> {
    let to_error = |source| SimError::LogWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    render(entries, &mut BufWriter::new(file)).map_err(to_error)
}

/// Exports the finished log as a pretty-printed JSON array.
pub fn write_json(path: &Path, entries: &[LogEntry]) -> Result<(), SimError> {
    let json = serde_json::to_string_pretty(entries).map_err(|source| SimError::JsonExport {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json + "\n").map_err(|source| SimError::LogWrite {
        path: path.to_path_buf(),
        source,
    })
}
