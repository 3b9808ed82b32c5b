//! Run journal.
//!
//! Records timestamped status lines for each run. Persistence is
//! best-effort: a failing sink must never abort the run, so `record` and
//! `flush` report problems to stderr instead of returning errors.

use crate::domain::{EntryLevel, JournalEntry};
use crate::error::Result;
use crate::storage::JournalSink;

/// Append-only journal over an injected sink.
pub struct RunJournal<S: JournalSink> {
    sink: S,
}

impl<S: JournalSink> RunJournal<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Append one entry stamped with the current time.
    pub fn record(&mut self, level: EntryLevel, message: impl Into<String>) {
        let entry = JournalEntry::new(level, message);
        if let Err(e) = self.sink.append(&entry.to_line()) {
            log::warn!("Failed to persist journal entry: {}", e);
            eprintln!("chorebot: journal entry lost: {}", e);
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.record(EntryLevel::Info, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.record(EntryLevel::Error, message);
    }

    /// Close out a run with a separator line.
    pub fn separator(&mut self) {
        self.info("-".repeat(50));
    }

    /// Persist all recorded entries. Best-effort, like `record`.
    pub fn flush(&mut self) {
        if let Err(e) = self.sink.flush() {
            log::warn!("Failed to flush journal: {}", e);
            eprintln!("chorebot: journal flush failed: {}", e);
        }
    }

    /// Last `n` persisted lines, oldest first.
    pub fn tail(&self, n: usize) -> Result<Vec<String>> {
        self.sink.tail(n)
    }
}
