//! In-memory storage used by tests and dry runs.

use super::traits::{CounterStore, JournalSink};
use crate::error::Result;

/// Counter held in memory, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    value: Option<u64>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a preexisting persisted value.
    pub fn with_value(value: u64) -> Self {
        Self { value: Some(value) }
    }
}

impl CounterStore for MemoryCounterStore {
    fn read(&self) -> Result<Option<u64>> {
        Ok(self.value)
    }

    fn write(&mut self, value: u64) -> Result<()> {
        self.value = Some(value);
        Ok(())
    }
}

/// Journal lines held in memory.
#[derive(Debug, Default)]
pub struct MemoryJournal {
    lines: Vec<String>,
    flushes: usize,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl JournalSink for MemoryJournal {
    fn append(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn tail(&self, n: usize) -> Result<Vec<String>> {
        let start = self.lines.len().saturating_sub(n);
        Ok(self.lines[start..].to_vec())
    }
}
