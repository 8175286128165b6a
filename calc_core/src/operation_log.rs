//! In-process, append-only audit log of calculator calls.
//!
//! Entries live for the lifetime of the log and are never mutated or removed.
//! Reads return snapshots, so later appends never change a sequence that was
//! already handed out.

use crate::{LogEntry, Result};
use std::cell::RefCell;
use std::io::{self, Write};

/// Default line written before the entries on [`OperationLog::dump`]
pub const DEFAULT_DUMP_HEADER: &str = "Previous calculation logs:";

/// Ordered record of audit lines.
///
/// Single-threaded: appends go through a `RefCell`. Swapping it for a
/// `Mutex` keeps every method signature unchanged.
#[derive(Debug)]
pub struct OperationLog {
    entries: RefCell<Vec<LogEntry>>,
    echo: bool,
    header: String,
}

impl Default for OperationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationLog {
    /// Create an empty log that echoes each line to the tracing sink
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            echo: true,
            header: DEFAULT_DUMP_HEADER.to_string(),
        }
    }

    /// Enable or disable echoing appended lines as `calc::audit` events
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Override the dump header line
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Append one entry at the end. Never fails.
    pub fn append(&self, entry: LogEntry) {
        if self.echo {
            tracing::info!(target: "calc::audit", "{}", entry.line);
        }
        self.entries.borrow_mut().push(entry);
    }

    /// Snapshot of every line, in insertion order
    pub fn all_entries(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|e| e.line.clone())
            .collect()
    }

    /// Snapshot of every typed entry, in insertion order
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Write the header followed by every entry, one per line
    pub fn dump_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.header)?;
        for entry in self.entries.borrow().iter() {
            writeln!(out, "{}", entry)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Dump to stdout
    pub fn dump(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.dump_to(&mut handle)
    }
}
