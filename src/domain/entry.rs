//! Journal entry types.
//!
//! Entries are append-only: once written to the journal they are never
//! mutated. The on-disk line format is `YYYY-MM-DD HH:MM:SS - LEVEL - message`.

use std::fmt;

use chrono::{DateTime, Local};

/// Severity of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLevel {
    Info,
    Error,
}

impl fmt::Display for EntryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryLevel::Info => write!(f, "INFO"),
            EntryLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// One timestamped status line recorded during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub timestamp: DateTime<Local>,
    pub level: EntryLevel,
    pub message: String,
}

impl JournalEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(level: EntryLevel, message: impl Into<String>) -> Self {
        Self::at(Local::now(), level, message)
    }

    /// Create an entry with an explicit timestamp.
    pub fn at(timestamp: DateTime<Local>, level: EntryLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
        }
    }

    /// Render the entry in the journal line format.
    pub fn to_line(&self) -> String {
        format!(
            "{} - {} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.level,
            self.message
        )
    }
}
